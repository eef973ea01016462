// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type LoginRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Password attempts per client IP: a burst of five, then one every two seconds.
pub fn login_rate_limit_layer() -> LoginRateLimitLayer {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(2);
    builder.burst_size(5);
    let config = builder
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .expect("valid rate limit configuration");

    GovernorLayer::new(config)
}
