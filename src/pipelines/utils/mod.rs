use candle_core::Device;
use tracing::info;

/// Loads a device to be used for the model.
/// If `index` is `Some(i)` it will attempt to load the specified CUDA device.
/// When `None` it defaults to CUDA device 0 if available and otherwise falls
/// back to CPU.
pub fn load_device_with(index: Option<usize>) -> anyhow::Result<Device> {
    let device = match index {
        Some(i) => Device::new_cuda(i)?,
        None => Device::cuda_if_available(0)?,
    };
    info!(cuda = device.is_cuda(), "inference device selected");
    Ok(device)
}

/// Convenience wrapper that selects CUDA 0 if available and otherwise falls
/// back to CPU.
pub fn load_device() -> anyhow::Result<Device> {
    load_device_with(None)
}

/// Request for a specific device, used by pipeline builders.
#[derive(Clone, Default)]
pub enum DeviceRequest {
    /// Use CUDA if available, otherwise CPU (default behavior).
    #[default]
    Default,
    /// Force CPU even if CUDA is available.
    Cpu,
    /// Select a specific CUDA device by index.
    Cuda(usize),
    /// Provide an already constructed device.
    Explicit(Device),
}

impl DeviceRequest {
    /// Resolve the request into an actual [`Device`].
    pub fn resolve(self) -> anyhow::Result<Device> {
        match self {
            DeviceRequest::Default => load_device_with(None),
            DeviceRequest::Cpu => Ok(Device::Cpu),
            DeviceRequest::Cuda(i) => load_device_with(Some(i)),
            DeviceRequest::Explicit(d) => Ok(d),
        }
    }
}
