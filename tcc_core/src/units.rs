//! # Unit Types
//!
//! Type-safe wrappers for engineering units. These are plain `f64` newtypes
//! that serialize as bare numbers.
//!
//! ## SI Internally
//!
//! Every quantity inside the calculation pipeline is SI:
//! - Length: metres (m)
//! - Force: newtons (N)
//! - Stress / modulus: pascals (Pa)
//! - Moment: newton-metres (N·m)
//! - Slip modulus: newtons per metre (N/m)
//!
//! Front-ends collect values in the units engineers type (GPa, mm, kN, kN/mm)
//! and convert at the boundary with the `From` impls below.
//!
//! ## Example
//!
//! ```rust
//! use tcc_core::units::{Gigapascals, Pascals, KilonewtonsPerMillimeter, NewtonsPerMeter};
//!
//! let e_timber: Pascals = Gigapascals(11.0).into();
//! assert_eq!(e_timber.0, 11.0e9);
//!
//! let k_ser: NewtonsPerMeter = KilonewtonsPerMillimeter(90.0).into();
//! assert_eq!(k_ser.0, 9.0e7);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Stress / Modulus Units
// ============================================================================

/// Stress or elastic modulus in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Elastic modulus in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1.0e6)
    }
}

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1.0e6)
    }
}

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * 1.0e9)
    }
}

impl From<Pascals> for Gigapascals {
    fn from(pa: Pascals) -> Self {
        Gigapascals(pa.0 / 1.0e9)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

impl From<KilonewtonMeters> for NewtonMeters {
    fn from(knm: KilonewtonMeters) -> Self {
        NewtonMeters(knm.0 * 1000.0)
    }
}

impl From<NewtonMeters> for KilonewtonMeters {
    fn from(nm: NewtonMeters) -> Self {
        KilonewtonMeters(nm.0 / 1000.0)
    }
}

// ============================================================================
// Slip Modulus Units
// ============================================================================

/// Connector slip modulus in newtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonsPerMeter(pub f64);

/// Connector slip modulus in kilonewtons per millimetre (as published for fasteners)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonsPerMillimeter(pub f64);

impl From<KilonewtonsPerMillimeter> for NewtonsPerMeter {
    fn from(k: KilonewtonsPerMillimeter) -> Self {
        NewtonsPerMeter(k.0 * 1.0e6)
    }
}

impl From<NewtonsPerMeter> for KilonewtonsPerMillimeter {
    fn from(k: NewtonsPerMeter) -> Self {
        KilonewtonsPerMillimeter(k.0 / 1.0e6)
    }
}
