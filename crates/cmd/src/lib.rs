// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Command implementations behind the `lfs` binary, exposed so they can be
//! driven directly from tests.

pub mod commands;
pub mod common;
