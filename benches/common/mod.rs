// ABOUTME: Common benchmark utilities and fixtures for conversion benchmarks
// ABOUTME: Provides deterministic Garmin payloads and the destination database shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and test fixtures.

pub mod fixtures;
