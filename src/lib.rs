// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! TetherFlash Relay - TRC20 Transfer & Notification Service
//!
//! A small HTTP relay that sends USDT from a single custodial TRON account,
//! reports that account's balance and delivers branded email notifications.
//!
//! ## Modules
//!
//! - `api` - HTTP handlers and router (Axum)
//! - `blockchain` - TRON addresses, amount scaling, TRC20 encoding, TronGrid client
//! - `gateway` - Request validation and external calls
//! - `mail` - Notification template and SMTP transport

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod mail;
pub mod models;
pub mod state;

#[cfg(test)]
mod testing;
