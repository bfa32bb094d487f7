use dioxus::prelude::*;

use crate::components::header_bar::HeaderBar;
use crate::pages::media_browser_page::MediaBrowserPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(HeaderBar)]


    #[route("/")]
    MediaBrowserPage {},

}
