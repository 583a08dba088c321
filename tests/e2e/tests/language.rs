use e2e::{browser::SiteTab, test_server::DevServer};

const STORED_LANGUAGE: &str = "localStorage.getItem('digitalsense-language')";

#[tokio::test]
#[ignore = "needs the dx CLI and a Chrome binary"]
async fn explicit_choice_survives_reload() {
    let server = DevServer::spawn().await.expect("dev server");
    let site = SiteTab::open(server.url()).expect("chrome");
    site.visit("/").expect("home");

    // Buttons are rendered RO, EN.
    site.click(".lang_switch .lang_btn:nth-child(2)").expect("pick EN");
    assert_eq!(site.text(".lang_btn.active").expect("active"), "EN");
    assert_eq!(site.js_string(STORED_LANGUAGE).expect("eval").as_deref(), Some("en"));

    site.reload().expect("reload");
    assert_eq!(site.text(".lang_btn.active").expect("active"), "EN");
    assert_eq!(
        site.js_string("document.documentElement.lang")
            .expect("eval")
            .as_deref(),
        Some("en")
    );
}

#[tokio::test]
#[ignore = "needs the dx CLI and a Chrome binary"]
async fn first_visit_stores_nothing() {
    let server = DevServer::spawn().await.expect("dev server");
    let site = SiteTab::open(server.url()).expect("chrome");

    site.visit("/").expect("home");
    site.text(".lang_btn.active").expect("switcher rendered");
    assert_eq!(site.js_string(STORED_LANGUAGE).expect("eval"), None);
}
