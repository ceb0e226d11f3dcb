// ABOUTME: Business logic services between HTTP handlers and backends
// ABOUTME: Search orchestration with fallbacks and custom recipe assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Labs

//! Service layer

pub mod custom;
pub mod search;
