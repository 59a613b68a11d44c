//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                    |
//! |------------|--------------|--------------------------------|
//! | `hardware` | SensorPort   | ESP32 ADC1 (oneshot)           |
//! |            | ActuatorPort | Relay + buzzer GPIO            |
//! | `serial`   | SerialPort   | UART1 host link / in-memory sim|
//! | `display`  | DisplaySink  | Serial log output              |
//! | `log_sink` | EventSink    | Serial log output              |
//! | `time`     | TimePort     | ESP32 system timer             |

pub mod display;
pub mod hardware;
pub mod log_sink;
pub mod serial;
pub mod time;
