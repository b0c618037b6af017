#![allow(dead_code)]

use application::{EnvironmentProvisioner, Ports};
use async_trait::async_trait;
use domain::config::ProvisionerConfig;
use domain::entities::device::{AndroidDevice, IosSimulator};
use domain::ports::{
    AndroidEmulator, CommandOutput, CommandRunner, CommandSpec, ExpoClientInstaller, FileStore,
    HttpClient, IosSimulatorControl, PortError,
};
use domain::system::HostPlatform;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Handler = Box<dyn Fn(&CommandSpec) -> CommandOutput + Send + Sync>;

/// Records every command; answers through an optional handler
pub struct RecordingRunner {
    pub calls: Mutex<Vec<CommandSpec>>,
    handler: Mutex<Option<Handler>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            handler: Mutex::new(None),
        }
    }

    pub fn respond_with(&self, handler: impl Fn(&CommandSpec) -> CommandOutput + Send + Sync + 'static) {
        *self.handler.lock().unwrap() = Some(Box::new(handler));
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|c| c.to_string()).collect()
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, PortError> {
        self.calls.lock().unwrap().push(spec.clone());
        Ok(match self.handler.lock().unwrap().as_ref() {
            Some(handler) => handler(spec),
            None => CommandOutput::success(""),
        })
    }
}

/// Filesystem kept in memory
#[derive(Default)]
pub struct MemoryFileStore {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    pub removed: Mutex<Vec<PathBuf>>,
}

impl MemoryFileStore {
    pub fn add_file(&self, path: impl AsRef<Path>, contents: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), contents.as_bytes().to_vec());
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.dirs.lock().unwrap().insert(path.as_ref().to_path_buf());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn missing(path: &Path) -> PortError {
        PortError::io(path, std::io::Error::new(std::io::ErrorKind::NotFound, "not found"))
    }
}

impl FileStore for MemoryFileStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().keys().any(|p| p.starts_with(path))
            || self.dirs.lock().unwrap().iter().any(|p| p.starts_with(path))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, PortError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| Self::missing(path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<(), PortError> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn append(&self, path: &Path, contents: &[u8]) -> Result<(), PortError> {
        self.files
            .lock()
            .unwrap()
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(contents);
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<(), PortError> {
        self.add_dir(path);
        Ok(())
    }

    fn remove_all(&self, path: &Path) -> Result<(), PortError> {
        if !self.exists(path) {
            return Err(Self::missing(path));
        }
        self.files.lock().unwrap().retain(|p, _| !p.starts_with(path));
        self.dirs.lock().unwrap().retain(|p| !p.starts_with(path));
        self.removed.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// Returns a fixed body, or a fixed failure
pub struct CannedHttp {
    body: Result<String, String>,
    pub requested: Mutex<Vec<String>>,
}

impl CannedHttp {
    pub fn ok(body: &str) -> Self {
        Self {
            body: Ok(body.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            body: Err(message.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HttpClient for CannedHttp {
    async fn get_text(&self, url: &str) -> Result<String, PortError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.body.clone().map_err(PortError::Http)
    }
}

/// Shared journal of device-level actions, in call order
#[derive(Default)]
pub struct DeviceLog {
    pub events: Mutex<Vec<String>>,
}

impl DeviceLog {
    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

pub struct FakeAndroid {
    pub devices: Vec<AndroidDevice>,
    pub log: Arc<DeviceLog>,
}

#[async_trait]
impl AndroidEmulator for FakeAndroid {
    async fn online_devices(&self) -> Result<Vec<AndroidDevice>, PortError> {
        Ok(self.devices.iter().filter(|d| d.is_online).cloned().collect())
    }

    async fn enable_draw_permit(&self, device: &AndroidDevice, package: &str) -> Result<(), PortError> {
        self.log.push(format!("permit:{}:{}", device.id, package));
        Ok(())
    }
}

pub struct FakeSimulator {
    pub log: Arc<DeviceLog>,
}

#[async_trait]
impl IosSimulatorControl for FakeSimulator {
    async fn shutdown(&self, device: &str) -> Result<(), PortError> {
        self.log.push(format!("shutdown:{}", device));
        Ok(())
    }

    async fn erase(&self, device: &str) -> Result<(), PortError> {
        self.log.push(format!("erase:{}", device));
        Ok(())
    }

    async fn boot(&self, device: &str) -> Result<(), PortError> {
        self.log.push(format!("boot:{}", device));
        Ok(())
    }
}

pub struct FakeExpoClient {
    pub log: Arc<DeviceLog>,
}

#[async_trait]
impl ExpoClientInstaller for FakeExpoClient {
    async fn install_on_android(&self, device: &AndroidDevice) -> Result<(), PortError> {
        self.log.push(format!("install-android:{}", device.id));
        Ok(())
    }

    async fn install_on_ios(&self, simulator: &IosSimulator) -> Result<(), PortError> {
        self.log
            .push(format!("install-ios:{}:{}", simulator.name, simulator.udid));
        Ok(())
    }
}

pub struct Harness {
    pub runner: Arc<RecordingRunner>,
    pub files: Arc<MemoryFileStore>,
    pub http: Arc<CannedHttp>,
    pub devices: Arc<DeviceLog>,
    pub provisioner: EnvironmentProvisioner,
}

pub fn test_config() -> ProvisionerConfig {
    let mut config = ProvisionerConfig::for_platform(HostPlatform::Linux);
    config.artifacts_dir = PathBuf::from("/artifacts");
    config.simulator_settle_delay = Duration::ZERO;
    config.ios_simulator.name = "iPhone 15".to_string();
    config.ios_simulator.udid = "UDID-1".to_string();
    config
}

pub struct HarnessBuilder {
    config: ProvisionerConfig,
    http: CannedHttp,
    android_devices: Vec<AndroidDevice>,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            config: test_config(),
            http: CannedHttp::ok("{}"),
            android_devices: Vec::new(),
        }
    }

    pub fn config(mut self, edit: impl FnOnce(&mut ProvisionerConfig)) -> Self {
        edit(&mut self.config);
        self
    }

    pub fn http(mut self, http: CannedHttp) -> Self {
        self.http = http;
        self
    }

    pub fn android_device(mut self, id: &str, is_online: bool) -> Self {
        self.android_devices.push(AndroidDevice {
            id: id.to_string(),
            is_online,
        });
        self
    }

    pub fn build(self) -> Harness {
        let runner = Arc::new(RecordingRunner::new());
        let files = Arc::new(MemoryFileStore::default());
        let http = Arc::new(self.http);
        let devices = Arc::new(DeviceLog::default());

        let ports = Ports {
            runner: runner.clone(),
            files: files.clone(),
            http: http.clone(),
            android: Arc::new(FakeAndroid {
                devices: self.android_devices,
                log: devices.clone(),
            }),
            simulator: Arc::new(FakeSimulator {
                log: devices.clone(),
            }),
            expo_client: Arc::new(FakeExpoClient {
                log: devices.clone(),
            }),
        };

        Harness {
            runner,
            files,
            http,
            devices,
            provisioner: EnvironmentProvisioner::new(self.config, ports),
        }
    }
}

pub fn harness() -> Harness {
    HarnessBuilder::new().build()
}
