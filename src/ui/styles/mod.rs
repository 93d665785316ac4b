// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the control widgets.

pub mod button;
pub mod svg;
pub mod tooltip;
