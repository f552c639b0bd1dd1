use dispatch_router::{Dispatcher, RouteOptions, RouterError, ServerRequest};

use serde_json::json;

fn main() -> Result<(), RouterError> {
    let target = std::env::args().nth(1).unwrap_or_else(|| "/about/?foo=bar".to_owned());

    let mut router = Dispatcher::new(ServerRequest::get(&target));
    router
        .map(
            "/about",
            "pages/about",
            RouteOptions::new().name("about").methods("GET"),
        )?
        .map("/user/:id", "users/show", RouteOptions::new().name("user"))?;

    if router.match_route().is_none() {
        eprintln!("route not found: {}", target);
        std::process::exit(1);
    }

    let input = router.input();
    let response = match router.route() {
        Some(route) => json!({
            "uri": route.uri(),
            "name": route.name(),
            "target": route.target(),
            "input": input,
        }),
        None => json!(null),
    };
    println!("{:#}", response);
    Ok(())
}
