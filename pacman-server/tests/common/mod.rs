use axum_test::TestServer;
use bon::builder;
use pacman_server::{
    app::{create_router, AppState},
    config::Config,
};

/// Test configuration for integration tests
#[allow(dead_code)]
pub struct TestContext {
    pub config: Config,
    pub server: TestServer,
    pub app_state: AppState,
}

#[builder]
pub fn test_context(#[builder(default = 10)] leaderboard_limit: usize) -> TestContext {
    let config = Config {
        port: 0, // Will be set by test server
        host: "127.0.0.1".parse().unwrap(),
        shutdown_timeout_seconds: 5,
        leaderboard_limit,
    };

    let app_state = AppState::new(config.clone());
    let router = create_router(app_state.clone());

    TestContext {
        server: TestServer::new(router).unwrap(),
        app_state,
        config,
    }
}
