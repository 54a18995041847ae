//! Small programs that take a value and decide something from it.

pub mod delivery_fee;
pub mod thermostat;

pub use delivery_fee::{run_delivery_fee, DeliveryFeePolicy, DeliveryQuote};
pub use thermostat::{classify, run_thermostat, Alert, DeviceStatus, ThermostatReading};
