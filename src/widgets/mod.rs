// SPDX-License-Identifier: MPL-2.0

//! Custom widgets for the Chipfold application.

pub mod chip_group;
