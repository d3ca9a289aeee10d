//! Single-body platformer physics: a player moving under gravity, friction
//! and a ground-gated push skill among static rectangular platforms, with a
//! pointer-driven four-way facing.
//!
//! The physics core ([`movement::PlayerBody::update`]) is a plain function of
//! the body, an [`movement::InputSnapshot`], an aim point and a
//! [`level::CollisionWorld`]. The Bevy plugins wire it into a fixed-tick app.

pub mod content;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod level;
pub mod movement;
pub mod simulation;
pub mod view;
