use e2e::{browser::SiteTab, test_server::DevServer};

#[tokio::test]
#[ignore = "needs the dx CLI and a Chrome binary"]
async fn homepage_is_served() {
    let server = DevServer::spawn().await.expect("dev server");

    let response = reqwest::get(server.url()).await.expect("GET /");
    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("body");
    assert!(body.contains("<!DOCTYPE html>") || body.contains("Digitalsense"));
}

#[tokio::test]
#[ignore = "needs the dx CLI and a Chrome binary"]
async fn alias_paths_render_the_same_page() {
    let server = DevServer::spawn().await.expect("dev server");
    let site = SiteTab::open(server.url()).expect("chrome");

    for (ro, en) in [("/servicii", "/services"), ("/despre-noi", "/about")] {
        let first = site
            .visit(ro)
            .and_then(|tab| tab.text("section.page_header h1"))
            .expect(ro);
        let second = site
            .visit(en)
            .and_then(|tab| tab.text("section.page_header h1"))
            .expect(en);
        assert_eq!(first, second, "{ro} and {en} differ");
    }
}

#[tokio::test]
#[ignore = "needs the dx CLI and a Chrome binary"]
async fn unknown_path_renders_not_found() {
    let server = DevServer::spawn().await.expect("dev server");
    let site = SiteTab::open(server.url()).expect("chrome");

    let heading = site
        .visit("/no/such/page")
        .and_then(|tab| tab.text("section.not_found h1"))
        .expect("not found view");
    assert_eq!(heading, "404");
}
