use actix_web::{App, test, web};
use elijah_portal::{
    config::Settings,
    routes,
    services::{quick_contact::QuickContact, whatsapp::ContactTarget},
};
use percent_encoding::percent_decode_str;
use serde_json::{Value, json};

fn app_data() -> (
    web::Data<Settings>,
    web::Data<ContactTarget>,
    web::Data<QuickContact>,
) {
    let settings = Settings::load().unwrap();
    let target = ContactTarget::new(&settings.contact.whatsapp_number).unwrap();
    let quick = QuickContact::new(target.clone(), settings.contact.quick_messages.clone());
    (
        web::Data::new(settings),
        web::Data::new(target),
        web::Data::new(quick),
    )
}

macro_rules! portal {
    () => {{
        let (settings, target, quick) = app_data();
        test::init_service(
            App::new()
                .app_data(settings)
                .app_data(target)
                .app_data(quick)
                .service(web::scope("/api").configure(routes::api::scoped_config)),
        )
        .await
    }};
}

fn decoded_text(whatsapp_url: &str) -> String {
    let encoded = whatsapp_url
        .split_once("?text=")
        .expect("url should carry a text parameter")
        .1;
    percent_decode_str(encoded)
        .decode_utf8()
        .unwrap()
        .into_owned()
}

#[actix_web::test]
async fn submit_composes_the_money_donation_message() {
    let app = portal!();

    let req = test::TestRequest::post()
        .uri("/api/donations/submit")
        .set_json(json!({
            "full_name": "Thandi M.",
            "donation_type": "money",
            "amount": "250",
            "preferred_method": "whatsapp"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"]["message"],
        "Hi Elijah Church of Christ, I want to donate to Charity & Outreach.\n\
         \n\
         — My Details —\n\
         Name: Thandi M.\n\
         \n\
         — Donation —\n\
         Type: money\n\
         Amount: R250\n\
         Preferred Method: WhatsApp"
    );

    let url = body["data"]["whatsapp_url"].as_str().unwrap();
    assert!(url.starts_with("https://wa.me/27637310437?text="));
    assert_eq!(decoded_text(url), body["data"]["message"].as_str().unwrap());
}

#[actix_web::test]
async fn submit_rejects_an_incomplete_form() {
    let app = portal!();

    let req = test::TestRequest::post()
        .uri("/api/donations/submit")
        .set_json(json!({
            "full_name": "Thandi M.",
            "donation_type": "money"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Donation form is incomplete");
}

#[actix_web::test]
async fn preview_disables_submit_for_goods_without_items() {
    let app = portal!();

    let req = test::TestRequest::post()
        .uri("/api/donations/preview")
        .set_json(json!({
            "full_name": "James",
            "donation_type": "blankets"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["submittable"], false);
    assert!(body["data"].get("message").is_none());
    assert!(body["data"].get("whatsapp_url").is_none());
}

#[actix_web::test]
async fn preview_includes_the_goods_message_sections() {
    let app = portal!();

    let req = test::TestRequest::post()
        .uri("/api/donations/preview")
        .set_json(json!({
            "full_name": "James",
            "donation_type": "blankets",
            "items": "2 blankets",
            "preferred_method": "eft",
            "message": "Please call first"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["submittable"], true);
    let message = body["data"]["message"].as_str().unwrap();
    assert!(message.contains("Items: 2 blankets"));
    assert!(message.contains("Preferred Method: EFT (please send banking details)"));
    assert!(message.ends_with("— Message —\nPlease call first"));
}

#[actix_web::test]
async fn quick_messages_are_listed_in_order() {
    let app = portal!();

    let req = test::TestRequest::get()
        .uri("/api/contact/quick-messages")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let messages = body["data"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1], "Please pray with me");
}

#[actix_web::test]
async fn contact_send_prefills_the_chosen_message() {
    let app = portal!();

    let req = test::TestRequest::post()
        .uri("/api/contact/send")
        .set_json(json!({ "message": "Please pray with me" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let url = body["data"]["whatsapp_url"].as_str().unwrap();
    assert_eq!(decoded_text(url), "Please pray with me");
}

#[actix_web::test]
async fn contact_send_without_message_gives_the_bare_link() {
    let app = portal!();

    let req = test::TestRequest::post()
        .uri("/api/contact/send")
        .set_json(json!({ "message": null }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["data"]["whatsapp_url"], "https://wa.me/27637310437");
}

#[actix_web::test]
async fn gallery_and_testimonies_serve_site_content() {
    let app = portal!();

    let req = test::TestRequest::get()
        .uri("/api/charity/gallery")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 9);
    assert_eq!(body["data"][0]["src"], "/helping.jpeg");

    let req = test::TestRequest::get().uri("/api/testimonies").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"][0]["name"], "Thandi M.");
}
