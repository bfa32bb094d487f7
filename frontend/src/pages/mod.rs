pub mod media_browser_page;
