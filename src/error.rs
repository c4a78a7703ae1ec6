//! Error types for gravfield.
//!
//! Only the window and GPU setup can fail. The physics itself has no failure
//! paths.

use std::fmt;

/// Renderer setup failures.
#[derive(Debug)]
pub enum GpuError {
    /// The window could not be turned into a wgpu surface.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No adapter can present to the window's surface.
    NoAdapter,
    /// The adapter refused to open a device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// The surface reports no usable texture format.
    NoSurfaceFormat,
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "cannot create a surface for the window: {}", e),
            GpuError::NoAdapter => write!(f, "no graphics adapter can draw to this window (is a Vulkan, Metal, DX12 or GL driver installed?)"),
            GpuError::DeviceCreation(e) => write!(f, "cannot open the graphics device: {}", e),
            GpuError::NoSurfaceFormat => write!(f, "the surface offers no texture format for the chosen adapter"),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Anything that stops [`Simulation::run`](crate::Simulation::run) before the window closes.
#[derive(Debug)]
pub enum SimulationError {
    /// The winit event loop could not start or aborted.
    EventLoop(winit::error::EventLoopError),
    /// The OS refused to open the window.
    Window(winit::error::OsError),
    /// The renderer could not be set up.
    Gpu(GpuError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::EventLoop(e) => write!(f, "event loop failed: {}", e),
            SimulationError::Window(e) => write!(f, "cannot open window: {}", e),
            SimulationError::Gpu(e) => write!(f, "renderer setup failed: {}", e),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::EventLoop(e) => Some(e),
            SimulationError::Window(e) => Some(e),
            SimulationError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for SimulationError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SimulationError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SimulationError {
    fn from(e: winit::error::OsError) -> Self {
        SimulationError::Window(e)
    }
}

impl From<GpuError> for SimulationError {
    fn from(e: GpuError) -> Self {
        SimulationError::Gpu(e)
    }
}
