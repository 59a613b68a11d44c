//! Host serial link adapter.
//!
//! - **`target_os = "espidf"`** — [`UartSerial`] wraps a UART1
//!   `UartDriver`.  Reads never block: received bytes are pulled into a
//!   small staging buffer with a zero timeout.  Writes append `\n`.
//! - **`not(target_os = "espidf")`** — [`SimSerial`] keeps an in-memory
//!   inbound queue and captures every outbound line.

use crate::app::ports::SerialPort;

// ───────────────────────────────────────────────────────────────
// ESP-IDF UART
// ───────────────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub use uart::UartSerial;

#[cfg(target_os = "espidf")]
mod uart {
    use esp_idf_hal::delay::NON_BLOCK;
    use esp_idf_hal::gpio::{AnyIOPin, InputPin, OutputPin};
    use esp_idf_hal::peripheral::Peripheral;
    use esp_idf_hal::uart::{Uart, UartDriver, config::Config};
    use esp_idf_hal::units::Hertz;
    use log::{info, warn};

    use super::SerialPort;
    use crate::error::SerialError;

    /// Bytes pulled from the driver per refill.
    const RX_CHUNK: usize = 32;

    pub struct UartSerial {
        driver: UartDriver<'static>,
        rx: [u8; RX_CHUNK],
        rx_pos: usize,
        rx_len: usize,
    }

    impl UartSerial {
        /// Install the UART driver at `baud`, 8N1, no flow control.
        pub fn open<U: Uart>(
            uart: impl Peripheral<P = U> + 'static,
            tx: impl Peripheral<P = impl OutputPin> + 'static,
            rx: impl Peripheral<P = impl InputPin> + 'static,
            baud: u32,
        ) -> Result<Self, SerialError> {
            let config = Config::default().baudrate(Hertz(baud));
            let driver = UartDriver::new(
                uart,
                tx,
                rx,
                Option::<AnyIOPin>::None,
                Option::<AnyIOPin>::None,
                &config,
            )
            .map_err(|e| SerialError::DriverInstall(e.code()))?;
            info!("Serial: UART open at {} baud", baud);
            Ok(Self {
                driver,
                rx: [0; RX_CHUNK],
                rx_pos: 0,
                rx_len: 0,
            })
        }

        fn refill(&mut self) -> Result<(), SerialError> {
            self.rx_pos = 0;
            self.rx_len = self
                .driver
                .read(&mut self.rx, NON_BLOCK)
                .map_err(|e| SerialError::ReadFailed(e.code()))?;
            Ok(())
        }

        fn write_all(&mut self, mut bytes: &[u8]) -> Result<(), SerialError> {
            while !bytes.is_empty() {
                let n = self
                    .driver
                    .write(bytes)
                    .map_err(|e| SerialError::WriteFailed(e.code()))?;
                bytes = &bytes[n..];
            }
            Ok(())
        }
    }

    impl SerialPort for UartSerial {
        fn read_byte(&mut self) -> Option<u8> {
            if self.rx_pos >= self.rx_len {
                if let Err(e) = self.refill() {
                    warn!("Serial: {}", e);
                    self.rx_len = 0;
                    return None;
                }
            }
            if self.rx_pos < self.rx_len {
                let byte = self.rx[self.rx_pos];
                self.rx_pos += 1;
                Some(byte)
            } else {
                None
            }
        }

        fn write_line(&mut self, line: &str) {
            let result = self
                .write_all(line.as_bytes())
                .and_then(|()| self.write_all(b"\n"));
            if let Err(e) = result {
                warn!("Serial: dropped line '{}': {}", line, e);
            }
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Host simulation
// ───────────────────────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
pub use sim::SimSerial;

#[cfg(not(target_os = "espidf"))]
mod sim {
    use std::collections::VecDeque;

    use super::SerialPort;

    /// In-memory loopback standing in for the UART.
    #[derive(Debug, Default)]
    pub struct SimSerial {
        inbound: VecDeque<u8>,
        outbound: Vec<String>,
    }

    impl SimSerial {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue bytes as if the host had sent them.
        pub fn inject(&mut self, bytes: &[u8]) {
            self.inbound.extend(bytes);
        }

        pub fn pending_input(&self) -> usize {
            self.inbound.len()
        }

        /// Lines written so far, without terminators.
        pub fn lines(&self) -> &[String] {
            &self.outbound
        }

        /// Drain captured lines.
        pub fn take_output(&mut self) -> Vec<String> {
            std::mem::take(&mut self.outbound)
        }
    }

    impl SerialPort for SimSerial {
        fn read_byte(&mut self) -> Option<u8> {
            self.inbound.pop_front()
        }

        fn write_line(&mut self, line: &str) {
            self.outbound.push(line.to_owned());
        }
    }
}
