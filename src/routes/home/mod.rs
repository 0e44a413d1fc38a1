use crate::startup::LogoAsset;
use crate::utils;
use actix_web::{web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;
use std::fmt::Write;

#[tracing::instrument(name = "/: Newsletter form page", skip(flash_msgs, logo))]
pub async fn home(flash_msgs: IncomingFlashMessages, logo: web::Data<LogoAsset>) -> HttpResponse {
    // Flash contents are written by our own handlers and signed, so they go
    // in as-is.
    let mut msg_html = String::new();
    for msg in flash_msgs.iter() {
        writeln!(msg_html, "<p class=\"flash\"><i>{}</i></p>", msg.content()).unwrap();
    }
    let body = utils::render_template(
        include_str!("home.html"),
        &[
            ("flash_messages", &msg_html),
            ("logo_data_uri", logo.data_uri()),
        ],
    );
    utils::ok_to(body)
}
