//! Shared HTML building blocks for the server-rendered pages.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

// Card styles
pub const CARD_STYLE: &str = "bg-white dark:bg-gray-800 rounded-2xl p-6 shadow \
    border border-gray-200 dark:border-gray-700";

pub const SECTION_HEADER_STYLE: &str = "text-2xl font-bold mb-6";

pub const MUTED_TEXT_STYLE: &str = "text-gray-500 dark:text-gray-400";

pub const LINK_STYLE: &str = "text-blue-600 hover:text-blue-500 \
    dark:text-blue-500 dark:hover:text-blue-400 underline";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full p-2.5 rounded text-sm \
    text-gray-900 dark:text-white bg-gray-50 dark:bg-gray-700 border \
    border-gray-300 dark:border-gray-600 dark:placeholder-gray-400 \
    focus:ring-blue-600 focus:border-blue-600";
pub const FORM_RADIO_GROUP_STYLE: &str = "flex gap-2";
pub const FORM_RADIO_INPUT_STYLE: &str = "peer h-4 w-4 shrink-0 cursor-pointer \
    text-blue-600 border-gray-300 dark:border-gray-600";
pub const FORM_RADIO_LABEL_STYLE: &str = "flex-1 rounded border border-gray-300 \
    dark:border-gray-600 bg-white dark:bg-gray-700 px-3 py-2 text-sm font-medium \
    text-gray-700 dark:text-white cursor-pointer peer-checked:border-blue-600";

pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-2 bg-blue-500 \
    dark:bg-blue-600 hover:bg-blue-600 dark:hover:bg-blue-700 text-white \
    font-bold rounded";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "flex flex-col px-4 py-8 mx-auto \
    max-w-screen-xl text-gray-900 dark:text-white";

const ECHARTS_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js";
const TAILWIND_URL: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

/// Wrap `content` in a complete HTML document.
///
/// `lang` is the value of the `lang` attribute of the document, e.g. "cs".
pub fn base(title: &str, lang: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang)
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - MoneyMap" }

                script src=(TAILWIND_URL) {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

/// The script element that loads ECharts, needed by any page with charts.
pub fn echarts_script() -> HeadElement {
    HeadElement::ScriptLink(ECHARTS_URL.to_owned())
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-blue-600 dark:text-blue-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-blue-600
                            hover:bg-blue-800 focus:ring-4 focus:outline-hidden
                            focus:ring-blue-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-blue-900 my-4"
                    {
                        "Back to Dashboard"
                    }
                }
            }
        }
    );

    base(title, "en", &[], &content)
}

/// Format `number` as whole Czech crowns, e.g. "-12 345 Kč".
pub fn format_currency(number: f64) -> String {
    format!("{} Kč", format_amount(number))
}

/// Format `number` as a whole number without a currency, e.g. "-12 345".
///
/// Groups of thousands are separated by a space, as is usual in Czech.
pub fn format_amount(number: f64) -> String {
    static FMT: OnceLock<Option<Formatter>> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::currency("")
            .inspect_err(|error| tracing::error!("could not create currency formatter: {error:?}"))
            .ok()
            .map(|formatter| formatter.precision(Precision::Decimals(0)))
    });

    let number = number.round();
    let magnitude = number.abs();

    let digits = match fmt {
        // Zero is hardcoded as "0" by numfmt, so it is handled here too
        Some(formatter) if magnitude > 0.0 => formatter.fmt_string(magnitude).replace(',', " "),
        _ => format!("{magnitude:.0}"),
    };

    if number < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Format `amount` with an explicit sign for income, e.g. "+5 000 Kč".
pub fn format_signed_currency(amount: f64) -> String {
    if amount > 0.0 {
        format!("+{}", format_currency(amount))
    } else {
        format_currency(amount)
    }
}
