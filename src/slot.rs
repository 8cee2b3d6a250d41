use std::fmt::Display;
use tracing::{debug, warn};

// Holds at most one live handle; dropping the handle releases it
pub struct ResourceSlot<H> {
    name: &'static str,
    handle: Option<H>,
}

impl<H> ResourceSlot<H> {
    pub fn new(name: &'static str) -> Self {
        Self { name, handle: None }
    }

    // Old handle is dropped before `create` runs. A failed factory leaves the slot empty.
    pub fn rebind<F, E>(&mut self, key: &str, create: F)
    where
        F: FnOnce() -> Result<H, E>,
        E: Display,
    {
        self.release();
        match create() {
            Ok(handle) => {
                debug!(slot = self.name, key, "bound");
                self.handle = Some(handle);
            }
            Err(e) => {
                warn!(slot = self.name, key, error = %e, "failed to create handle");
            }
        }
    }

    pub fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            drop(handle);
            debug!(slot = self.name, "released");
        }
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    pub fn get(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut H> {
        self.handle.as_mut()
    }
}

impl<H> Drop for ResourceSlot<H> {
    fn drop(&mut self) {
        self.release();
    }
}
