//! Attribution footer.

use leptos::prelude::*;

pub const ZENQUOTES_HOME: &str = "https://zenquotes.io";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__content">
                <p>
                    "Powered by "
                    <a href=ZENQUOTES_HOME target="_blank" rel="noopener noreferrer" class="footer__link">
                        "ZenQuotes API"
                    </a>
                </p>
                <p class="footer__credits">"Built with ❤️ for daily inspiration"</p>
            </div>
        </footer>
    }
}
