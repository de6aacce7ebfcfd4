use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::device::Device;

/// Record persistence capability consumed by the HTTP layer.
///
/// `list_all` must return records in insertion order — the signing
/// batch output is aligned 1:1 with it.
pub trait DeviceStore: Send + Sync {
    /// Persist the device, assigning an identifier. Returns the stored record.
    fn save(&self, device: Device) -> Device;

    /// All stored devices, in insertion order.
    fn list_all(&self) -> Vec<Device>;
}

/// In-memory store. Backing the trait with a database is a deployment
/// concern; signing only needs the ordered listing.
#[derive(Default)]
pub struct InMemoryDeviceStore {
    devices: Mutex<Vec<Device>>,
    next_id: AtomicU64,
}

impl DeviceStore for InMemoryDeviceStore {
    fn save(&self, mut device: Device) -> Device {
        device.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.devices
            .lock()
            .expect("device store lock poisoned")
            .push(device.clone());
        device
    }

    fn list_all(&self) -> Vec<Device> {
        self.devices
            .lock()
            .expect("device store lock poisoned")
            .clone()
    }
}
