//! Per-client rate limiting using the token bucket algorithm.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Quota applied to a group of routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Public endpoints (redirects, health, link lookup): 2 req/s, burst 100.
    Public,
    /// Authenticated endpoints: 1 req/s, burst 10.
    Authenticated,
}

impl Tier {
    fn quota(self) -> (u64, u32) {
        match self {
            Tier::Public => (2, 100),
            Tier::Authenticated => (1, 10),
        }
    }
}

/// Wraps `router` in a rate limiter for `tier`.
///
/// When `behind_proxy` is `true` the client key is read from
/// `X-Forwarded-For` / `X-Real-IP` / `Forwarded`, falling back to the peer
/// address. Otherwise only the peer socket address is used, so requests must
/// carry `ConnectInfo<SocketAddr>`.
///
/// Requests over the limit receive `429 Too Many Requests`.
pub fn apply(router: Router<AppState>, tier: Tier, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        router.layer(proxy_layer(tier))
    } else {
        router.layer(peer_layer(tier))
    }
}

fn peer_layer(
    tier: Tier,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let (per_second, burst) = tier.quota();
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

fn proxy_layer(
    tier: Tier,
) -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let (per_second, burst) = tier.quota();
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
