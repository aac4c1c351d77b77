// ─────────────────────────────────────────────────────────────────────
// SCPN Helio-Thermal — Helio Engineering
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Lens-concentrated Peltier power modules.
//!
//! - `calculator`: the input → hot side → output power chain
//! - `report`: text/JSON snapshot of one evaluation
//! - `sweep`: one-parameter design sweep

pub mod calculator;
pub mod report;
pub mod sweep;
