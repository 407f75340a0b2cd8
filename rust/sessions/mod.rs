//! Exchange sessions: the open and close instants of every trading day.
//!
//! The [`SessionProvider`] trait is the seam between calendar construction and the source of
//! truth for exchange hours. [`ExchangeSessions`] implements it for the named exchanges in
//! [`named`](crate::scheduling::named), generating holidays and early closes by rule.

mod exchange;
mod provider;

pub use crate::sessions::{
    exchange::ExchangeSessions,
    provider::{Session, SessionProvider, Sessions},
};
