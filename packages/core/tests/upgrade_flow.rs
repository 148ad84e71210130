//! End-to-end flows over the public API with an in-memory executor

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use sat_upgrade_core::hammer::parse_csv_report;
use sat_upgrade_core::host::{get_hostname_from_ip_with, host_pings_with};
use sat_upgrade_core::setup_state::{create_setup_dict_at, get_setup_data_at};
use sat_upgrade_core::{
    HostError, PollSettings, RemoteExecutor, RunOptions, SetupData, copy_ssh_key,
    get_sat_cap_version, reboot,
};
use serde_json::json;

/// Fake lab: per-host file contents and command log
#[derive(Default)]
struct FakeLab {
    authorized_keys: RefCell<HashMap<String, Vec<String>>>,
    log: RefCell<Vec<(String, String)>>,
    down: RefCell<Vec<String>>,
}

impl RemoteExecutor for FakeLab {
    fn run(&self, host: &str, command: &str, options: RunOptions) -> Result<String, HostError> {
        self.log
            .borrow_mut()
            .push((host.to_string(), command.to_string()));

        if self.down.borrow().iter().any(|h| h == host) {
            return Err(HostError::ConnectionFailed {
                host: host.to_string(),
                message: "No route to host".to_string(),
            });
        }

        if command == "reboot" {
            assert!(options.warn_only);
            self.down.borrow_mut().push(host.to_string());
            return Err(HostError::ConnectionFailed {
                host: host.to_string(),
                message: "closed by remote host".to_string(),
            });
        }
        if command.contains("cat ~/.ssh/id_rsa.pub") {
            return Ok(format!("ssh-rsa AAAAfake root@{host}\n"));
        }
        if let Some(rest) = command.strip_prefix("echo \"") {
            let key = rest.split('"').next().unwrap_or_default().to_string();
            self.authorized_keys
                .borrow_mut()
                .entry(host.to_string())
                .or_default()
                .push(key);
            return Ok(String::new());
        }
        if command == "hostname" {
            return Ok(format!("{host}.lab.example.com\n"));
        }
        if command == "rpm -q satellite" {
            return Ok("satellite-6.2.1-1.noarch\n".to_string());
        }
        Ok(String::new())
    }
}

#[test]
fn ssh_key_propagation_appends_every_run() {
    let lab = FakeLab::default();
    let targets = ["cap1", "cap2"];

    copy_ssh_key(&lab, "sat", &targets).unwrap();
    copy_ssh_key(&lab, "sat", &targets).unwrap();

    let keys = lab.authorized_keys.borrow();
    for target in targets {
        assert_eq!(
            keys[target],
            vec!["ssh-rsa AAAAfake root@sat", "ssh-rsa AAAAfake root@sat"]
        );
    }
}

#[test]
fn reboot_then_hostname_times_out_while_down() {
    let lab = FakeLab::default();
    reboot(&lab, "10.0.0.9", Duration::ZERO).unwrap();

    let settings = PollSettings::new(Duration::from_millis(30), Duration::from_millis(5));
    let hostname = get_hostname_from_ip_with(&lab, "10.0.0.9", settings).unwrap();
    assert!(hostname.is_none());

    lab.down.borrow_mut().clear();
    let hostname = get_hostname_from_ip_with(&lab, "10.0.0.9", settings).unwrap();
    assert_eq!(hostname.as_deref(), Some("10.0.0.9.lab.example.com"));
}

#[test]
fn ping_with_closure_pinger() {
    let settings = PollSettings::new(Duration::from_secs(5), Duration::from_millis(1));
    assert!(host_pings_with(&|host: &str| host == "sat", "sat", settings));
}

#[test]
fn setup_phase_hands_data_to_upgrade_phase() {
    let lab = FakeLab::default();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("product_setup");

    let installed = get_sat_cap_version(&lab, "sat", "satellite")
        .unwrap()
        .unwrap();
    let listing = parse_csv_report("host", "Name,Id\nhost1.ab.com,10\n").unwrap();

    let mut setup = SetupData::new();
    setup.insert("sat_version".to_string(), json!(installed.version));
    setup.insert("hosts".to_string(), serde_json::to_value(&listing).unwrap());
    create_setup_dict_at(&path, &setup).unwrap();

    let restored = get_setup_data_at(&path).unwrap();
    assert_eq!(restored["sat_version"], json!("6.2.1"));
    assert_eq!(
        restored["hosts"],
        json!({"host": [{"name": "host1.ab.com", "id": "10"}]})
    );
}
