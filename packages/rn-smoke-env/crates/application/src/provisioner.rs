use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use domain::entities::device::IosSimulator;
use domain::entities::expo_settings::{self, EXPO_DIR, SETTINGS_FILE};
use domain::entities::launch::{LaunchDocument, LAUNCH_FILE, VSCODE_DIR};
use domain::entities::metro::{METRO_CONFIG_FILE, METRO_CONFIG_PATCH};
use domain::entities::process_list::find_macos_app_pid;
use domain::entities::scaffold;
use domain::entities::versions::VersionManifest;
use domain::ports::{
    AndroidEmulator, CommandOutput, CommandRunner, CommandSpec, ExpoClientInstaller, FileStore,
    HttpClient, IosSimulatorControl, OutputMode, PortError,
};
use domain::ProvisionerConfig;
use infrastructure::{
    AdbEmulator, ExpoGoInstaller, LocalFileStore, ReqwestClient, SimctlSimulator,
    SystemCommandRunner,
};

use crate::error::{ProvisionError, Result};

/// The capabilities the provisioner is allowed to use
#[derive(Clone)]
pub struct Ports {
    pub runner: Arc<dyn CommandRunner>,
    pub files: Arc<dyn FileStore>,
    pub http: Arc<dyn HttpClient>,
    pub android: Arc<dyn AndroidEmulator>,
    pub simulator: Arc<dyn IosSimulatorControl>,
    pub expo_client: Arc<dyn ExpoClientInstaller>,
}

/// Where a test application lives and where its fixtures come from
#[derive(Debug, Clone)]
pub struct TestApp {
    /// Entry point inside the workspace that gets overwritten (`App.js`, `App.tsx`)
    pub workspace_file: PathBuf,
    /// Fixture directory; scaffold commands also run from here
    pub resources_dir: PathBuf,
    /// Generated project root
    pub workspace_dir: PathBuf,
    pub app_name: String,
}

/// Everything a test run may leave behind
#[derive(Debug, Clone, Default)]
pub struct CleanUpPaths {
    pub test_dir: PathBuf,
    pub user_data_dir: PathBuf,
    pub test_logs_dir: PathBuf,
    pub workspace_paths: Vec<PathBuf>,
    pub expo_cache_dir: PathBuf,
}

/// Prepares and tears down disposable React Native workspaces.
///
/// Every operation runs its steps in order and stops at the first failure.
/// Nothing is rolled back, so a failed setup may leave a half-built workspace.
pub struct EnvironmentProvisioner {
    config: ProvisionerConfig,
    ports: Ports,
}

impl EnvironmentProvisioner {
    pub fn new(config: ProvisionerConfig, ports: Ports) -> Self {
        Self { config, ports }
    }

    /// Provisioner wired to the real host: processes, filesystem, network, adb and simctl
    pub fn with_system_adapters(config: ProvisionerConfig) -> Self {
        let runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner::new());
        let ports = Ports {
            runner: runner.clone(),
            files: Arc::new(LocalFileStore::new()),
            http: Arc::new(ReqwestClient::new()),
            android: Arc::new(AdbEmulator::new(runner.clone())),
            simulator: Arc::new(SimctlSimulator::new(runner.clone())),
            expo_client: Arc::new(ExpoGoInstaller::new(
                runner,
                config.expo_client.clone(),
                config.expo_bundle_id.clone(),
            )),
        };
        Self::new(config, ports)
    }

    pub fn config(&self) -> &ProvisionerConfig {
        &self.config
    }

    fn exec(&self, spec: CommandSpec) -> Result<CommandOutput> {
        let output = self.ports.runner.run(&spec)?;
        if !output.is_success() {
            return Err(ProvisionError::CommandFailed {
                command: spec.to_string(),
                code: output.code,
            });
        }
        Ok(output)
    }

    fn logged(&self) -> OutputMode {
        OutputMode::LogTo(self.config.commands_log_file())
    }

    fn copy_fixture(&self, from: &Path, to: &Path) -> Result<()> {
        tracing::info!(target: "project_patching", "*** Copying {} into {}...", from.display(), to.display());
        self.ports.files.copy(from, to)?;
        Ok(())
    }

    pub fn prepare_react_native_application(
        &self,
        app: &TestApp,
        entry_point_folder: &str,
        version: Option<&str>,
    ) -> Result<()> {
        let command = scaffold::react_native_init(&app.app_name, version);
        self.setup_react_native_application(app, entry_point_folder, command)
    }

    pub fn prepare_hermes_react_native_application(
        &self,
        app: &TestApp,
        entry_point_folder: &str,
    ) -> Result<()> {
        let android_dir = app.workspace_dir.join("android");
        if !self.ports.files.exists(&android_dir) {
            return Err(PortError::io(
                android_dir,
                io::Error::new(io::ErrorKind::NotFound, "Android project directory is missing"),
            )
            .into());
        }

        let wrapper = android_dir.join(&self.config.gradle_wrapper);
        let clean = scaffold::gradle_clean(&wrapper.display().to_string())
            .current_dir(&android_dir)
            .output(OutputMode::Inherit);
        tracing::info!(target: "project_patching", "*** Executing {} ...", clean);
        self.exec(clean)?;

        let fixtures = app.resources_dir.join(entry_point_folder);
        self.copy_fixture(&fixtures.join("App.js"), &app.workspace_file)?;
        self.copy_gradle_files_to_hermes_app(app, entry_point_folder)?;
        self.copy_fixture(
            &fixtures.join("AppTestButton.js"),
            &app.workspace_dir.join("AppTestButton.js"),
        )
    }

    pub fn prepare_expo_application(&self, app: &TestApp, sdk_major_version: Option<&str>) -> Result<()> {
        let command = scaffold::expo_init(&app.app_name, sdk_major_version)
            .current_dir(&app.resources_dir)
            .output(self.logged());
        tracing::info!(
            target: "project_install",
            "*** Creating Expo app via '{}' in {}...",
            command,
            app.workspace_dir.display()
        );
        self.exec(command)?;

        let entry_point = app.resources_dir.join("ExpoSample").join("App.tsx");
        self.copy_fixture(&entry_point, &app.workspace_file)?;
        self.install_launch_config(app)?;
        self.patch_metro_config(&app.workspace_dir)
    }

    pub fn prepare_macos_application(&self, workspace_dir: &Path) -> Result<()> {
        let command = scaffold::react_native_macos_init(&self.config.npx_command)
            .current_dir(workspace_dir)
            .output(self.logged());
        tracing::info!(
            target: "project_patching",
            "*** Installing the React Native for macOS packages via '{}' in {}...",
            command,
            workspace_dir.display()
        );
        self.exec(command).map(|_| ())
    }

    pub fn add_expo_dependency_to_rn_project(&self, workspace_dir: &Path, version: Option<&str>) -> Result<()> {
        let command = scaffold::install_expo_dependency(&self.config.npm_command, version)
            .current_dir(workspace_dir)
            .output(self.logged());
        tracing::info!(
            target: "project_patching",
            "*** Adding expo dependency to {} via '{}' command...",
            workspace_dir.display(),
            command
        );
        self.exec(command).map(|_| ())
    }

    pub fn prepare_rnw_application(
        &self,
        app: &TestApp,
        entry_point_folder: &str,
        version: Option<&str>,
    ) -> Result<()> {
        let npx = &self.config.npx_command;
        let setup = scaffold::react_native_windows_template_init(npx, &app.app_name, version);
        self.setup_react_native_application(app, entry_point_folder, setup)?;

        let command = scaffold::react_native_windows_init(npx)
            .current_dir(&app.workspace_dir)
            .output(self.logged());
        tracing::info!(target: "project_patching", "*** Install additional RNW packages using {}", command);
        self.exec(command).map(|_| ())
    }

    /// Remove every test artifact that exists. Missing paths are skipped, so
    /// running this twice is harmless.
    pub fn clean_up(&self, paths: &CleanUpPaths) -> Result<()> {
        tracing::info!("*** Clean up...");
        self.remove_if_exists("test VS Code directory", &paths.test_dir)?;
        self.remove_if_exists("VS Code temporary user data dir", &paths.user_data_dir)?;
        self.remove_if_exists("test logs directory", &paths.test_logs_dir)?;
        for workspace in &paths.workspace_paths {
            self.remove_if_exists("test application", workspace)?;
        }
        self.remove_if_exists("iOS expo app cache directory", &paths.expo_cache_dir)
    }

    fn remove_if_exists(&self, what: &str, path: &Path) -> Result<()> {
        if self.ports.files.exists(path) {
            tracing::info!("*** Deleting {}: {}", what, path.display());
            self.ports.files.remove_all(path)?;
        }
        Ok(())
    }

    /// React Native version used by the requested Expo SDK major, or by the
    /// newest SDK when none is requested or the request matches nothing.
    pub async fn get_latest_supported_rn_version_for_expo(&self, sdk_major_version: Option<u64>) -> Result<String> {
        let sdk_label = sdk_major_version
            .map(|major| format!("sdk-{}", major))
            .unwrap_or_default();
        let latest = if sdk_major_version.is_none() { "latest " } else { "" };
        tracing::info!(
            "*** Getting latest React Native version supported by {}Expo {}...",
            latest,
            sdk_label
        );

        let content = self.ports.http.get_text(&self.config.versions_url).await?;
        let selection = VersionManifest::parse(&content)?.select(sdk_major_version)?;

        if selection.fell_back_to_latest {
            tracing::warn!(
                "*** Could not find the version of Expo sdk matching the specified version - {}",
                sdk_label
            );
        }
        tracing::info!(
            "*** Latest React Native version supported by Expo {}: {}",
            selection.sdk_version,
            selection.react_native_version
        );
        Ok(selection.react_native_version)
    }

    /// Install the Expo client on the first online emulator, then let it draw over other apps
    pub async fn install_expo_app_on_android(&self) -> Result<()> {
        tracing::info!("*** Installing Expo app on Android emulator");
        let device = self
            .ports
            .android
            .online_devices()
            .await?
            .into_iter()
            .next()
            .ok_or(ProvisionError::NoOnlineAndroidDevice)?;

        self.ports.expo_client.install_on_android(&device).await?;
        self.ports
            .android
            .enable_draw_permit(&device, &self.config.expo_package_name)
            .await?;
        Ok(())
    }

    pub async fn install_expo_app_on_ios(&self) -> Result<()> {
        tracing::info!("*** Installing Expo app on iOS simulator");
        let simulator = IosSimulator {
            name: self.config.ios_simulator.name.clone(),
            udid: self.config.ios_simulator.udid.clone(),
        };
        self.ports.expo_client.install_on_ios(&simulator).await?;
        Ok(())
    }

    /// Drop `"https": false` from `<app>/.expo/settings.json` when present
    pub fn patch_expo_settings_file(&self, expo_app_path: &Path) -> Result<()> {
        let settings_path = expo_app_path.join(EXPO_DIR).join(SETTINGS_FILE);
        if !self.ports.files.exists(&settings_path) {
            return Ok(());
        }

        tracing::info!(target: "project_patching", "*** Patching {}...", settings_path.display());
        let content = self.ports.files.read_to_string(&settings_path)?;
        if let Some(patched) = expo_settings::patch_settings(&content)? {
            tracing::info!(target: "project_patching", "*** Deleting https: false line...");
            self.ports.files.write(&settings_path, patched.as_bytes())?;
        }
        Ok(())
    }

    /// Set (or with `None`, remove) `target` on the named launch configuration
    pub fn set_ios_target_to_launch_json(
        &self,
        workspace_dir: &Path,
        config_name: &str,
        target: Option<&str>,
    ) -> Result<()> {
        let launch_path = workspace_dir.join(VSCODE_DIR).join(LAUNCH_FILE);
        match target {
            Some(target) => tracing::info!(
                target: "project_patching",
                "*** Implicitly adding target {} to \"{}\" config for {}",
                target,
                config_name,
                launch_path.display()
            ),
            None => tracing::info!(
                target: "project_patching",
                "*** Implicitly remove target from \"{}\" config",
                config_name
            ),
        }

        let mut document = LaunchDocument::parse(&self.ports.files.read_to_string(&launch_path)?)?;
        document.set_target(config_name, target)?;
        self.ports
            .files
            .write(&launch_path, document.to_pretty_string()?.as_bytes())?;
        Ok(())
    }

    fn simulator_device(&self) -> Result<&str> {
        let name = self.config.ios_simulator.name.as_str();
        if name.is_empty() {
            return Err(ProvisionError::IosSimulatorNotConfigured);
        }
        Ok(name)
    }

    /// Shut down, wipe and boot the configured simulator, then give it time to settle
    pub async fn run_ios_simulator(&self) -> Result<()> {
        let device = self.simulator_device()?;
        self.terminate_ios_simulator().await?;
        self.ports.simulator.erase(device).await?;
        self.ports.simulator.boot(device).await?;
        tokio::time::sleep(self.config.simulator_settle_delay).await;
        Ok(())
    }

    pub async fn terminate_ios_simulator(&self) -> Result<()> {
        let device = self.simulator_device()?;
        self.ports.simulator.shutdown(device).await?;
        Ok(())
    }

    /// Kill the running `<app_name>.app` bundle, if there is one
    pub fn terminate_macos_app(&self, app_name: &str) -> Result<()> {
        tracing::info!("*** Searching for {} macOS application process", app_name);
        let processes = self.exec(scaffold::list_processes())?;
        tracing::debug!(
            "*** Searching for {} macOS application process: results {:?}",
            app_name,
            processes.stdout
        );

        if let Some(pid) = find_macos_app_pid(&processes.stdout, app_name) {
            tracing::info!(
                "*** Terminating {} macOS application process with PID {}",
                app_name,
                pid
            );
            self.exec(scaffold::terminate_process(pid))?;
        }
        Ok(())
    }

    /// Append the Metro fragment to `<app>/metro.config.js`
    pub fn patch_metro_config(&self, app_path: &Path) -> Result<()> {
        let metro_config = app_path.join(METRO_CONFIG_FILE);
        tracing::info!(target: "project_patching", "*** Patching {}", metro_config.display());
        self.ports
            .files
            .append(&metro_config, METRO_CONFIG_PATCH.as_bytes())?;

        let patched = self.ports.files.read_to_string(&metro_config)?;
        tracing::info!(
            target: "project_patching",
            "*** Content of a metro.config.js after patching: {}",
            patched
        );
        Ok(())
    }

    pub fn install_expo_xdl_package_to_extension_dir(&self, extension_dir: &Path, version: &str) -> Result<()> {
        let command = scaffold::install_expo_xdl(&self.config.npm_command, version)
            .current_dir(extension_dir)
            .output(self.logged());
        tracing::info!(
            target: "project_patching",
            "*** Adding @expo/xdl dependency to {} via '{}' command...",
            extension_dir.display(),
            command
        );
        self.exec(command).map(|_| ())
    }

    fn copy_gradle_files_to_hermes_app(&self, app: &TestApp, entry_point_folder: &str) -> Result<()> {
        let app_gradle = app.workspace_dir.join("android").join("app").join("build.gradle");
        let fixture_gradle = app.resources_dir.join(entry_point_folder).join("build.gradle");
        self.copy_fixture(&fixture_gradle, &app_gradle)
    }

    fn install_launch_config(&self, app: &TestApp) -> Result<()> {
        let vscode_dir = app.workspace_dir.join(VSCODE_DIR);
        if !self.ports.files.exists(&vscode_dir) {
            tracing::info!(target: "project_patching", "*** Creating {}...", vscode_dir.display());
            self.ports.files.create_dir(&vscode_dir)?;
        }
        self.copy_fixture(
            &app.resources_dir.join(LAUNCH_FILE),
            &vscode_dir.join(LAUNCH_FILE),
        )
    }

    fn setup_react_native_application(
        &self,
        app: &TestApp,
        entry_point_folder: &str,
        command: CommandSpec,
    ) -> Result<()> {
        let command = command
            .current_dir(&app.resources_dir)
            .output(self.logged());
        tracing::info!(
            target: "project_install",
            "*** Creating RN app via '{}' in {}...",
            command,
            app.workspace_dir.display()
        );
        self.exec(command)?;

        let entry_point = app.resources_dir.join(entry_point_folder).join("App.js");
        self.copy_fixture(&entry_point, &app.workspace_file)?;
        self.install_launch_config(app)?;
        self.patch_metro_config(&app.workspace_dir)
    }
}
