// @generated by rest-adapter-generator. Do not edit.
//
// Services: 2, methods: 4
//   demo.v1.Library
//   demo.v1.Projects

/// REST adapter for `demo.v1.Library`
pub mod demo_v1_library {
    #![allow(dead_code, unused_imports, clippy::all)]

    use super::*;
    use rest_adapter_runtime as rt;
    use rt::axum;
    use rt::axum::response::IntoResponse;

    /// REST bindings of `demo.v1.Library` in declaration order
    pub const ROUTES: &[rt::Route] = &[
        // GET /v1/shelves/{shelf}/books/{book} (shelf, book)
        rt::Route {
            method: "GetBook",
            verb: "GET",
            template: "/v1/shelves/{shelf}/books/{book}",
            body: rt::BodySelector::None,
        },
        // POST /v1/shelves/{shelf}/books (shelf)
        rt::Route {
            method: "CreateBook",
            verb: "POST",
            template: "/v1/shelves/{shelf}/books",
            body: rt::BodySelector::Field("book"),
        },
        // POST /v1/shelves/{shelf}:merge (shelf)
        rt::Route {
            method: "MergeShelves",
            verb: "POST",
            template: "/v1/shelves/{shelf}:merge",
            body: rt::BodySelector::All,
        },
    ];

    /// Handle to the `demo.v1.Library` RPC service
    ///
    /// `Error` decides how RPC failures render as HTTP responses.
    pub trait LibraryRpc: Send + Sync + 'static {
        type Error: IntoResponse + Send;

        /// `GET /v1/shelves/{shelf}/books/{book}`
        fn get_book(
            &self,
            request: GetBookRequest,
        ) -> impl ::std::future::Future<
            Output = ::std::result::Result<Book, Self::Error>,
        > + Send;

        /// `POST /v1/shelves/{shelf}/books`
        fn create_book(
            &self,
            request: CreateBookRequest,
        ) -> impl ::std::future::Future<
            Output = ::std::result::Result<Book, Self::Error>,
        > + Send;

        /// `POST /v1/shelves/{shelf}:merge`
        fn merge_shelves(
            &self,
            request: MergeShelvesRequest,
        ) -> impl ::std::future::Future<
            Output = ::std::result::Result<Shelf, Self::Error>,
        > + Send;
    }

    static TABLE: rt::RouteTable = rt::RouteTable::new(ROUTES);

    /// Axum router serving every route in [`ROUTES`]
    ///
    /// Only plain routes are registered, so routers of different services
    /// merge into one app.
    pub fn router<T: LibraryRpc>(handle: T) -> axum::Router {
        axum::Router::new()
            .route(
                "/v1/shelves/{*rest}",
                axum::routing::on(
                    axum::routing::MethodFilter::GET.or(axum::routing::MethodFilter::POST),
                    dispatch::<T>,
                ),
            )
            .with_state(::std::sync::Arc::new(handle))
    }

    async fn dispatch<T: LibraryRpc>(
        axum::extract::State(handle): axum::extract::State<::std::sync::Arc<T>>,
        method: axum::http::Method,
        uri: axum::http::Uri,
        body: axum::body::Bytes,
    ) -> axum::response::Response {
        let request = match rt::RestRequest::new(method, &uri, body) {
            Ok(request) => request,
            Err(rejection) => return rejection.into_response(),
        };

        let matched = match request.route(&TABLE) {
            Ok(matched) => matched,
            Err(error) => return error.into_response(),
        };

        match matched {
            Some((0, captures)) => {
                let input: GetBookRequest =
                    match request.decode(&ROUTES[0], captures) {
                        Ok(input) => input,
                        Err(rejection) => return rejection.into_response(),
                    };
                rt::respond(handle.get_book(input).await)
            }
            Some((1, captures)) => {
                let input: CreateBookRequest =
                    match request.decode(&ROUTES[1], captures) {
                        Ok(input) => input,
                        Err(rejection) => return rejection.into_response(),
                    };
                rt::respond(handle.create_book(input).await)
            }
            Some((2, captures)) => {
                let input: MergeShelvesRequest =
                    match request.decode(&ROUTES[2], captures) {
                        Ok(input) => input,
                        Err(rejection) => return rejection.into_response(),
                    };
                rt::respond(handle.merge_shelves(input).await)
            }
            _ => rt::not_found(request.method(), request.path()),
        }
    }
}

/// REST adapter for `demo.v1.Projects`
pub mod demo_v1_projects {
    #![allow(dead_code, unused_imports, clippy::all)]

    use super::*;
    use rest_adapter_runtime as rt;
    use rt::axum;
    use rt::axum::response::IntoResponse;

    /// REST bindings of `demo.v1.Projects` in declaration order
    pub const ROUTES: &[rt::Route] = &[
        // GET /v1/{name=projects/*} (name)
        rt::Route {
            method: "GetProject",
            verb: "GET",
            template: "/v1/{name=projects/*}",
            body: rt::BodySelector::None,
        },
    ];

    /// Handle to the `demo.v1.Projects` RPC service
    ///
    /// `Error` decides how RPC failures render as HTTP responses.
    pub trait ProjectsRpc: Send + Sync + 'static {
        type Error: IntoResponse + Send;

        /// `GET /v1/{name=projects/*}`
        fn get_project(
            &self,
            request: GetProjectRequest,
        ) -> impl ::std::future::Future<
            Output = ::std::result::Result<Project, Self::Error>,
        > + Send;
    }

    static TABLE: rt::RouteTable = rt::RouteTable::new(ROUTES);

    /// Axum router serving every route in [`ROUTES`]
    ///
    /// Only plain routes are registered, so routers of different services
    /// merge into one app.
    pub fn router<T: ProjectsRpc>(handle: T) -> axum::Router {
        axum::Router::new()
            .route(
                "/v1/projects/{*rest}",
                axum::routing::on(
                    axum::routing::MethodFilter::GET,
                    dispatch::<T>,
                ),
            )
            .with_state(::std::sync::Arc::new(handle))
    }

    async fn dispatch<T: ProjectsRpc>(
        axum::extract::State(handle): axum::extract::State<::std::sync::Arc<T>>,
        method: axum::http::Method,
        uri: axum::http::Uri,
        body: axum::body::Bytes,
    ) -> axum::response::Response {
        let request = match rt::RestRequest::new(method, &uri, body) {
            Ok(request) => request,
            Err(rejection) => return rejection.into_response(),
        };

        let matched = match request.route(&TABLE) {
            Ok(matched) => matched,
            Err(error) => return error.into_response(),
        };

        match matched {
            Some((0, captures)) => {
                let input: GetProjectRequest =
                    match request.decode(&ROUTES[0], captures) {
                        Ok(input) => input,
                        Err(rejection) => return rejection.into_response(),
                    };
                rt::respond(handle.get_project(input).await)
            }
            _ => rt::not_found(request.method(), request.path()),
        }
    }
}
