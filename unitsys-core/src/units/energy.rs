//! Energy quantities.
//!
//! The canonical unit is the SI joule. Newton-meters and watt-seconds are
//! aliases of the joule; the watt-hour and electron-volt families cover the
//! everyday and atomic scales.

use crate::constants::ELEMENTARY_CHARGE;
use crate::Quantity;
use unitsys_derive::Kind;

/// Kind marker for energy.
#[derive(Clone, Copy, Debug, PartialEq, Kind)]
#[kind(symbol = "J")]
pub enum EnergyKind {}

/// An energy quantity.
pub type Energy = Quantity<EnergyKind>;

crate::unit_constructors! {
    Energy {
        /// Millijoules (`1 mJ = 10^-3 J`).
        millijoules => 1e-3,
        /// Joules (SI base unit).
        joules => 1.0,
        /// Kilojoules (`1 kJ = 10^3 J`).
        kilojoules => 1e3,
        /// Megajoules (`1 MJ = 10^6 J`).
        megajoules => 1e6,
        /// Gigajoules (`1 GJ = 10^9 J`).
        gigajoules => 1e9,
        /// Newton-meters (`1 N·m = 1 J`).
        newton_meters => 1.0,
        /// Watt-seconds (`1 W·s = 1 J`).
        watt_seconds => 1.0,
        /// Watt-hours (`1 Wh = 3_600 J`).
        watt_hours => 3_600.0,
        /// Kilowatt-hours (`1 kWh = 3.6e6 J`).
        kilowatt_hours => 3.6e6,
        /// Megawatt-hours (`1 MWh = 3.6e9 J`).
        megawatt_hours => 3.6e9,
        /// Electron volts (`1 eV = 1.602176634e-19 J`).
        electron_volts => ELEMENTARY_CHARGE,
        /// Kiloelectron volts (`1 keV = 10^3 eV`).
        kiloelectron_volts => 1e3 * ELEMENTARY_CHARGE,
        /// Megaelectron volts (`1 MeV = 10^6 eV`).
        megaelectron_volts => 1e6 * ELEMENTARY_CHARGE,
        /// Gigaelectron volts (`1 GeV = 10^9 eV`).
        gigaelectron_volts => 1e9 * ELEMENTARY_CHARGE,
    }
}
