mod admin;
mod api;
mod blogs;
mod carousel;
mod config;
mod contact;
mod content;
mod date;
mod deferred;
mod dom;
mod events;
mod home;
mod hooks;
mod layout;
mod navbar;
mod navigation;
mod previews;
mod projects;
mod route_listener;
mod routes;
mod scroll_observer;
mod sections;

fn main() {
    if let Err(err) = dioxus::logger::init(config::log_level()) {
        eprintln!("logger init failed: {err}");
    }
    dioxus::launch(routes::App);
}
