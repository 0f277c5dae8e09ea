//! Image acquisition and the per-screen request lifecycle.
//!
//! A [`CaptureSession`] belongs to one capture screen. It owns the camera-facing
//! toggle and the in-flight flag, asks the device for permission before touching the
//! camera or gallery, and hands the resulting photo to an [`Identifier`]. Nothing here
//! is global: two screens get two independent sessions.

use crate::error::{IdentifyError, Result};
use crate::identifier::Identifier;
use crate::image::ImageFile;
use crate::mock::MockFixture;
use crate::results::{IdentificationResult, PlantIdentificationResult, RecipeIdentificationResult};
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Camera,
    MediaLibrary,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::Camera => write!(f, "camera"),
            Permission::MediaLibrary => write!(f, "media library"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

impl CameraFacing {
    pub fn toggled(self) -> Self {
        match self {
            CameraFacing::Back => CameraFacing::Front,
            CameraFacing::Front => CameraFacing::Back,
        }
    }
}

/// Where the photo comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Camera,
    Gallery,
}

impl ImageSource {
    pub fn required_permission(self) -> Permission {
        match self {
            ImageSource::Camera => Permission::Camera,
            ImageSource::Gallery => Permission::MediaLibrary,
        }
    }
}

/// Camera, gallery and permission prompts provided by the host platform
#[async_trait]
pub trait DeviceCapabilities: Send + Sync {
    async fn request_permission(&self, permission: Permission) -> PermissionStatus;

    /// Take a photo; `None` when the user cancels
    async fn capture_photo(&self, facing: CameraFacing) -> Result<Option<PathBuf>>;

    /// Pick a stored photo; `None` when the user cancels
    async fn pick_from_gallery(&self) -> Result<Option<PathBuf>>;
}

/// Clears the in-flight flag when the request finishes, however it finishes
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct CaptureSession {
    device: Arc<dyn DeviceCapabilities>,
    identifier: Arc<Identifier>,
    facing: CameraFacing,
    in_flight: AtomicBool,
}

impl CaptureSession {
    pub fn new(device: Arc<dyn DeviceCapabilities>, identifier: Arc<Identifier>) -> Self {
        Self {
            device,
            identifier,
            facing: CameraFacing::default(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn facing(&self) -> CameraFacing {
        self.facing
    }

    pub fn toggle_camera(&mut self) -> CameraFacing {
        self.facing = self.facing.toggled();
        self.facing
    }

    /// True while a request is outstanding; the trigger button should be disabled
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Ask for the right permission, then capture or pick a photo.
    ///
    /// Returns `Ok(None)` when the user backs out of the picker.
    pub async fn acquire(&self, source: ImageSource) -> Result<Option<ImageFile>> {
        let permission = source.required_permission();
        let status = self.device.request_permission(permission).await;
        if status != PermissionStatus::Granted {
            warn!("{} permission not granted ({:?})", permission, status);
            return Err(IdentifyError::PermissionDenied(permission));
        }

        let path = match source {
            ImageSource::Camera => self.device.capture_photo(self.facing).await?,
            ImageSource::Gallery => self.device.pick_from_gallery().await?,
        };

        match path {
            Some(path) => Ok(Some(ImageFile::new(path)?)),
            None => {
                info!("Image selection cancelled");
                Ok(None)
            }
        }
    }

    pub async fn identify_plant(
        &self,
        source: ImageSource,
    ) -> Result<Option<PlantIdentificationResult>> {
        self.identify(source).await
    }

    pub async fn identify_recipe(
        &self,
        source: ImageSource,
    ) -> Result<Option<RecipeIdentificationResult>> {
        self.identify(source).await
    }

    /// Acquire a photo and identify it, refusing to start while another request from
    /// this session is still running.
    pub async fn identify<T>(&self, source: ImageSource) -> Result<Option<T>>
    where
        T: IdentificationResult + MockFixture,
    {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(IdentifyError::RequestInFlight);
        }
        let _guard = InFlight(&self.in_flight);

        match self.acquire(source).await? {
            Some(image) => self.identifier.identify::<T>(&image).await.map(Some),
            None => Ok(None),
        }
    }
}
