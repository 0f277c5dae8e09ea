/// Capture Session Example
///
/// Drives a full capture screen against canned data: a fake device that always grants
/// permission and returns a fixed photo path, and a mock identifier. No network or API
/// key is needed.
///
/// Usage:
///   cargo run --example mock_session
use async_trait::async_trait;
use identilens::prelude::*;
use identilens::session::{CameraFacing, Permission, PermissionStatus};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

struct DesktopDevice {
    grant_camera: bool,
}

#[async_trait]
impl DeviceCapabilities for DesktopDevice {
    async fn request_permission(&self, permission: Permission) -> PermissionStatus {
        match permission {
            Permission::Camera if !self.grant_camera => PermissionStatus::Denied,
            _ => PermissionStatus::Granted,
        }
    }

    async fn capture_photo(&self, facing: CameraFacing) -> Result<Option<PathBuf>> {
        println!("[device] capturing with {:?} camera", facing);
        Ok(Some(PathBuf::from("capture.jpg")))
    }

    async fn pick_from_gallery(&self) -> Result<Option<PathBuf>> {
        println!("[device] picked gallery photo");
        Ok(Some(PathBuf::from("gallery/pantry.png")))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let identifier = Arc::new(Identifier::mock(Duration::from_millis(500)));

    let mut plant_screen = CaptureSession::new(
        Arc::new(DesktopDevice { grant_camera: true }),
        identifier.clone(),
    );
    plant_screen.toggle_camera();

    if let Some(result) = plant_screen.identify_plant(ImageSource::Camera).await? {
        println!("{}", PlantReport::new(result));
    }

    let recipe_screen = CaptureSession::new(
        Arc::new(DesktopDevice { grant_camera: false }),
        identifier,
    );

    // Camera refused: the screen shows the permission message instead of a result
    let denied = recipe_screen.identify_recipe(ImageSource::Camera).await;
    let state = ScreenState::from_result(denied.map(|r| r.map(|r| RecipeReport::new(&r))));
    if let ScreenState::Failed { message, permission } = state {
        println!("Camera screen: {} (permission: {})", message, permission);
    }

    if let Some(result) = recipe_screen.identify_recipe(ImageSource::Gallery).await? {
        println!("{}", RecipeReport::new(&result));
    }

    Ok(())
}
