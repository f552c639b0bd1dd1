use dispatch_router::{
    routes, Dispatcher, Method, Request, RouteOptions, RouterError, ServerRequest,
};

fn no_params() -> Vec<(&'static str, &'static str)> {
    Vec::new()
}

#[test]
fn dispatcher_about() {
    let mut d = Dispatcher::new(ServerRequest::get("/about/?foo=bar"));
    d.map(
        "/about",
        "pages/about",
        RouteOptions::new().name("about").methods("GET"),
    )
    .unwrap();

    let route = d.match_route().unwrap();
    assert_eq!(route.uri(), "/about/");
    assert_eq!(route.name(), Some("about"));
    assert_eq!(route.target(), "pages/about");
    assert_eq!(route.methods(), &[Method::GET]);

    let input = d.input();
    assert_eq!(input.len(), 1);
    assert_eq!(input["foo"], "bar");
}

#[test]
fn dispatcher_invalid_method() {
    let mut d = Dispatcher::new(ServerRequest::get("/"));
    let ret = d.map("/x", "x", RouteOptions::new().methods("GET,BOGUS"));
    assert!(matches!(ret, Err(RouterError::InvalidMethods { .. })));
    assert!(d.is_empty());
}

#[test]
fn dispatcher_method_filter() {
    let mut d = Dispatcher::new(ServerRequest::post("/user/42"));
    d.map("/user/:id", "users/show", RouteOptions::new()).unwrap();
    assert!(d.match_route().is_none());

    d.map("/user/:id", "users/update", RouteOptions::new().methods("POST,PUT"))
        .unwrap();
    assert_eq!(d.match_route().unwrap().target(), "users/update");

    d.set_request(ServerRequest::new(Method::DELETE, "/user/42"));
    assert!(d.match_route().is_none());

    d.set_request(ServerRequest::new(Method::HEAD, "/user/42"));
    assert_eq!(d.match_route().unwrap().target(), "users/show");
}

#[test]
fn dispatcher_first_registered_wins() {
    let mut d = Dispatcher::new(ServerRequest::get("/user/42/"));
    routes!(d, {
        GET "/user/:id" => "first",
        GET "/user/:uid" => "second",
        GET "/user/42" => "third"
    })
    .unwrap();

    let route = d.match_route().unwrap();
    assert_eq!(route.target(), "first");
    assert_eq!(route.parameter("id"), Some("42"));
    assert_eq!(route.parameter("uid"), None);
}

#[test]
fn dispatcher_parameters() {
    let cases: &[(&str, &str, &[(&str, &str)])] = &[
        ("/user/42/", "user", &[("id", "42")]),
        ("/user/42", "user", &[("id", "42")]),
        ("/USER/abc-def", "user", &[("id", "abc-def")]),
        (
            "/u/ann/post/hello_world",
            "post",
            &[("user", "ann"), ("slug", "hello_world")],
        ),
        ("/static/app.css", "static", &[]),
    ];

    for &(path, target, params) in cases {
        let mut d = Dispatcher::new(ServerRequest::get(path));
        routes!(d, {
            GET "/user/:id" => "user",
            GET "/u/:user/post/:slug" => "post",
            GET "/static" => "static"
        })
        .unwrap();

        let route = d.match_route().unwrap();
        assert_eq!(route.target(), target, "path = {:?}", path);
        let got: Vec<(&str, &str)> = route.parameters().iter().collect();
        assert_eq!(&got, params, "path = {:?}", path);
    }
}

#[test]
fn dispatcher_no_match() {
    let mut d = Dispatcher::new(ServerRequest::get("/missing"));
    routes!(d, { GET "/about" => "pages/about" }).unwrap();

    assert!(d.match_route().is_none());
    assert!(d.route().is_none());
    assert!(d.input().is_empty());
}

#[test]
fn dispatcher_match_idempotent() {
    let mut d = Dispatcher::new(ServerRequest::get("/user/7"));
    routes!(d, { GET "/user/:id" => "users/show" as "user" }).unwrap();

    let first = d.match_route().map(|r| (r.uri().to_owned(), r.parameters().clone()));
    let second = d.match_route().map(|r| (r.uri().to_owned(), r.parameters().clone()));
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn dispatcher_resets_between_requests() {
    let mut d = Dispatcher::new(ServerRequest::get("/user/7"));
    routes!(d, {
        GET "/user/:id" => "users/show",
        GET "/post/:id" => "posts/show"
    })
    .unwrap();

    assert_eq!(d.match_route().unwrap().parameter("id"), Some("7"));

    let prev = d.set_request(ServerRequest::get("/post/9"));
    assert_eq!(prev.path(), "/user/7");
    assert!(d.route().is_none());

    assert_eq!(d.match_route().unwrap().target(), "posts/show");
    assert!(d.routes()[0].parameters().is_empty());

    d.set_request(ServerRequest::get("/nowhere"));
    assert!(d.match_route().is_none());
    assert!(d.routes().iter().all(|r| r.parameters().is_empty()));
}

#[test]
fn dispatcher_input_precedence() {
    let req = ServerRequest::post("/item/baz?foo=bar&page=2")
        .with_body("application/x-www-form-urlencoded", "page=3&q=shoes");
    let mut d = Dispatcher::new(&req);
    d.map("/item/:foo", "items/show", RouteOptions::new().methods("POST"))
        .unwrap();

    let before = d.input();
    assert_eq!(before["foo"], "bar");
    assert_eq!(before["page"], "3");

    d.match_route().unwrap();
    let input = d.input();
    assert_eq!(input["foo"], "baz");
    assert_eq!(input["page"], "3");
    assert_eq!(input["q"], "shoes");
    assert_eq!(input.len(), 3);
}

#[test]
fn dispatcher_input_json_body() {
    let req = ServerRequest::new(Method::PUT, "/user/5?name=query")
        .with_body("application/json", r#"{"name":"body","admin":false}"#);
    let mut d = Dispatcher::new(req);
    d.map("/user/:id", "users/update", RouteOptions::new().method(Method::PUT))
        .unwrap();
    d.match_route().unwrap();

    let input = d.input();
    assert_eq!(input["id"], "5");
    assert_eq!(input["name"], "body");
    assert_eq!(input["admin"], "false");
}

#[test]
fn dispatcher_reverse() {
    let mut d = Dispatcher::new(ServerRequest::get("/"));
    routes!(d, {
        GET "/about" => "pages/about" as "about",
        GET "/u/:uid/p/:pid" => "posts/show" as "post"
    })
    .unwrap();

    assert_eq!(d.uri("about", no_params()).unwrap(), "/about/");
    assert_eq!(d.uri("post", [("uid", "7"), ("pid", "9")]).unwrap(), "/u/7/p/9/");
    assert_eq!(d.uri("post", [("pid", "9")]).unwrap(), "/u/:uid/p/9/");
    assert_eq!(d.uri("post", vec![("pid".to_owned(), 9.to_string())]).unwrap(), "/u/:uid/p/9/");

    let err = d.uri("missing", no_params()).unwrap_err();
    assert!(matches!(err, RouterError::RouteNotFound(ref name) if name == "missing"));
    assert_eq!(err.to_string(), "invalid route name: missing");
}

#[test]
fn dispatcher_duplicate_name_rebinds() {
    let mut d = Dispatcher::new(ServerRequest::get("/old"));
    routes!(d, {
        GET "/old" => "old" as "page",
        GET "/new" => "new" as "page"
    })
    .unwrap();

    assert_eq!(d.len(), 2);
    assert_eq!(d.named("page").unwrap().target(), "new");
    assert_eq!(d.uri("page", no_params()).unwrap(), "/new/");
    assert_eq!(d.match_route().unwrap().target(), "old");
}

#[test]
fn dispatcher_unnamed_not_indexed() {
    let mut d = Dispatcher::new(ServerRequest::get("/"));
    d.map("/about", "pages/about", RouteOptions::new()).unwrap();
    assert!(d.named("about").is_none());
    assert!(d.uri("about", no_params()).is_err());
}

#[test]
fn dispatcher_attributes() {
    let mut d = Dispatcher::new(ServerRequest::get("/admin"));
    d.map(
        "/admin",
        "admin/index",
        RouteOptions::new()
            .name("admin")
            .id("r-1")
            .attr("auth", true)
            .attr("roles", vec!["staff", "root"]),
    )
    .unwrap();

    let route = d.match_route().unwrap();
    assert_eq!(route.id(), Some("r-1"));
    assert_eq!(route.attribute("auth"), Some(&serde_json::json!(true)));
    assert_eq!(route.attribute("roles"), Some(&serde_json::json!(["staff", "root"])));
    assert_eq!(route.attribute("name"), Some(&serde_json::json!("admin")));
    assert_eq!(route.attribute("missing"), None);
    assert_eq!(route.parameter("missing"), None);
}
