//! # Cybersim - network model and game-mode validation for attack/defense training simulations
//!
//! This library provides the core data model for a configurable
//! cyber-security attack/defense simulation used as a training environment
//! for reinforcement-learning agents.
//!
//! ## Overview
//!
//! A simulation episode is built from two objects: a [`network::Network`]
//! (an owned graph of nodes with entry/high-value roles and per-node
//! vulnerabilities) and a [`game_mode::GameMode`] (a validated aggregate of
//! configuration sections: rewards, observation space, game rules, and
//! per-episode reset behavior). This crate owns the invariants both must
//! satisfy before an episode is allowed to run; attack propagation, reward
//! scoring, and agent policy live downstream.
//!
//! ## Key Features
//!
//! - **Constraint-satisfying randomization**: entry and high-value node
//!   selection without replacement, kept disjoint, with loud failures when
//!   the node pool is too small
//! - **Reproducible episodes**: every randomized reset takes an explicit
//!   seedable RNG rather than ambient process state
//! - **Fail-fast configuration**: raw documents are type-checked and
//!   semantically validated to completion before any settings object exists
//! - **Legacy compatibility**: flattened-key game-mode files are translated
//!   into the current nested format before validation
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `network`: topology model, randomized role/vulnerability resets,
//!   deterministic layout, and the serialized network record
//! - `game_mode`: the generic validated-section abstraction and the
//!   concrete sections aggregated into a game mode
//! - `rewards`: the closed registry of reward strategies a game mode may
//!   name
//! - `store`: name-keyed lookup over documents of stored networks and game
//!   modes
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cybersim::game_mode::load_game_mode;
//! use cybersim::network::{Network, Node};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let game_mode = load_game_mode(std::path::Path::new("game_mode.yaml"))?;
//!
//! let mut network = Network::new();
//! network.num_of_random_entry_nodes = 2;
//! let a = Node::named("router-1");
//! let b = Node::named("server-1");
//! let (a_id, b_id) = (a.id().clone(), b.id().clone());
//! network.add_node(a)?;
//! network.add_node(b)?;
//! network.add_edge(&a_id, &b_id)?;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! network.reset_random_entry_nodes(&mut rng)?;
//! network.set_node_positions();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Domain errors are typed enums ([`network::NetworkError`],
//! [`game_mode::ConfigError`]) carrying the offending node, key, or value.
//! File-loading boundaries return `color_eyre::Result` with context. None
//! of these errors are retried internally; they indicate authoring or
//! programming mistakes and the caller is expected to surface them and
//! abort setup.

pub mod game_mode;
pub mod network;
pub mod rewards;
pub mod store;
