/// Registers several routes on a [`Dispatcher`](crate::Dispatcher).
///
/// ```
/// use dispatch_router::{routes, Dispatcher, ServerRequest};
///
/// let mut d = Dispatcher::new(ServerRequest::get("/user/42"));
/// routes!(d, {
///     GET "/about" => "pages/about" as "about",
///     GET "/user/:id" => "users/show",
///     POST "/user" => "users/create" as "users.create"
/// })
/// .unwrap();
///
/// assert_eq!(d.match_route().unwrap().target(), "users/show");
/// ```
#[macro_export]
macro_rules! routes {
    (@entry $dispatcher:expr, $method:tt, $uri:expr, $target:expr) => {
        $dispatcher.map(
            $uri,
            $target,
            $crate::RouteOptions::new().method($crate::routes!(@method $method)),
        )?
    };
    (@entry $dispatcher:expr, $method:tt, $uri:expr, $target:expr, $name:expr) => {
        $dispatcher.map(
            $uri,
            $target,
            $crate::RouteOptions::new()
                .method($crate::routes!(@method $method))
                .name($name),
        )?
    };

    (@method GET) => { $crate::Method::GET };
    (@method POST) => { $crate::Method::POST };
    (@method PUT) => { $crate::Method::PUT };
    (@method DELETE) => { $crate::Method::DELETE };
    (@method HEAD) => { $crate::Method::HEAD };
    (@method OPTIONS) => { $crate::Method::OPTIONS };
    (@method CONNECT) => { $crate::Method::CONNECT };
    (@method PATCH) => { $crate::Method::PATCH };
    (@method TRACE) => { $crate::Method::TRACE };

    ($dispatcher:expr, {$($method:tt $uri:literal => $target:literal $(as $name:literal)?),+ $(,)?}) => {{
        (|| -> ::std::result::Result<(), $crate::RouterError> {
            $($crate::routes!(@entry $dispatcher, $method, $uri, $target $(, $name)?);)+
            Ok(())
        })()
    }};
}
