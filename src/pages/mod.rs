// SPDX-License-Identifier: MPL-2.0

//! Page view modules for the Chipfold application.
//! Each module contains the view logic for a specific page.

pub mod settings;
pub mod showcase;
pub mod widgets;
