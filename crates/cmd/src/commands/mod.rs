// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod cat;
pub mod copy;
pub mod list;
pub mod meta;
pub mod mv;
pub mod rm;
pub mod stat;
pub mod write;

pub use cat::cat_command;
pub use copy::copy_command;
pub use list::list_command;
pub use meta::meta_command;
pub use mv::mv_command;
pub use rm::rm_command;
pub use stat::stat_command;
pub use write::write_command;
