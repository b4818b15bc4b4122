//! The navigation bar shared by the server-rendered pages.

use maud::{Markup, html};

use crate::{endpoints, html::LINK_STYLE, period::Period, summary::Language};

/// A link in the navigation bar.
///
/// Only one link should be current at any one time.
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

/// The links between the pages plus the language switch.
pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
    active_endpoint: &'a str,
    language: Language,
    period: Option<Period>,
}

impl<'a> NavBar<'a> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &'a str, language: Language) -> Self {
        let texts = language.texts();

        let links = [
            (endpoints::DASHBOARD_VIEW, texts.title),
            (endpoints::TRANSACTIONS_VIEW, texts.transactions_title),
            (endpoints::BUDGETS_VIEW, texts.budgets_title),
        ]
        .into_iter()
        .map(|(url, title)| Link {
            url,
            title,
            is_current: active_endpoint == url,
        })
        .collect();

        Self {
            links,
            active_endpoint,
            language,
            period: None,
        }
    }

    /// Keep `period` in the language switch links so that switching language
    /// shows the same month.
    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn into_html(self) -> Markup {
        let languages = [(Language::Cz, "CZ"), (Language::En, "EN")];

        html!(
            nav class="flex flex-wrap justify-between items-center gap-4 mb-8"
            {
                ul class="flex gap-6 font-medium"
                {
                    @for link in &self.links {
                        li
                        {
                            @if link.is_current {
                                span aria-current="page" class="text-blue-700 dark:text-blue-500" { (link.title) }
                            } @else {
                                a href=(page_href(link.url, None, self.language)) class=(LINK_STYLE) { (link.title) }
                            }
                        }
                    }
                }

                div id="language-switch" class="flex gap-2 text-sm"
                {
                    @for (language, label) in languages {
                        @if language == self.language {
                            span class="font-bold" { (label) }
                        } @else {
                            a href=(page_href(self.active_endpoint, self.period, language)) class=(LINK_STYLE) { (label) }
                        }
                    }
                }
            }
        )
    }
}

/// The URL of the page at `path` in `language`, optionally for a given month.
pub fn page_href(path: &str, period: Option<Period>, language: Language) -> String {
    match period {
        Some(period) => format!(
            "{path}?month={}&year={}&lang={}",
            period.month,
            period.year,
            language.query_code()
        ),
        None => format!("{path}?lang={}", language.query_code()),
    }
}
