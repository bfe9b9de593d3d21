//! Built-in simulated scenario.
//!
//! Generates a plausible process mix (web servers, databases, scripts,
//! editors) with parent/child hierarchy. Deterministic for a given seed so
//! the dashboard and its tests see stable data.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::record::{ProcessRecord, ProcessState};

struct Template {
    user: &'static str,
    command: &'static str,
    port: Option<u16>,
    service: Option<&'static str>,
    file: Option<&'static str>,
    /// Worker commands spawned under this process (level 1).
    workers: &'static [&'static str],
}

const TEMPLATES: &[Template] = &[
    Template {
        user: "root",
        command: "nginx: master process /usr/sbin/nginx -g daemon off;",
        port: Some(80),
        service: Some("nginx"),
        file: None,
        workers: &["nginx: worker process", "nginx: worker process"],
    },
    Template {
        user: "app",
        command: "node /srv/app/server.js --port 3000",
        port: Some(3000),
        service: Some("node"),
        file: None,
        workers: &[],
    },
    Template {
        user: "app",
        command: "python3 /srv/app/worker.py",
        port: None,
        service: Some("python"),
        file: None,
        workers: &[],
    },
    Template {
        user: "app",
        command: "java -jar /srv/app/indexer.jar",
        port: Some(8080),
        service: Some("java"),
        file: None,
        workers: &[],
    },
    Template {
        user: "mysql",
        command: "/usr/sbin/mysqld --datadir=/var/lib/mysql",
        port: Some(3306),
        service: Some("mysql"),
        file: None,
        workers: &[],
    },
    Template {
        user: "postgres",
        command: "postgres -D /var/lib/postgresql/data",
        port: Some(5432),
        service: Some("postgres"),
        file: None,
        workers: &["postgres: checkpointer", "postgres: walwriter"],
    },
    Template {
        user: "backup",
        command: "bash /opt/scripts/backup.sh",
        port: None,
        service: None,
        file: Some("/opt/scripts/backup.sh"),
        workers: &[],
    },
    Template {
        user: "dev",
        command: "vim /srv/www/index.html",
        port: None,
        service: None,
        file: Some("/srv/www/index.html"),
        workers: &[],
    },
    Template {
        user: "dev",
        command: "vim /srv/app/static/main.js",
        port: None,
        service: None,
        file: Some("/srv/app/static/main.js"),
        workers: &[],
    },
    Template {
        user: "dev",
        command: "vim /srv/app/static/style.css",
        port: None,
        service: None,
        file: Some("/srv/app/static/style.css"),
        workers: &[],
    },
    Template {
        user: "dev",
        command: "jq . /srv/app/package.json",
        port: None,
        service: None,
        file: Some("/srv/app/package.json"),
        workers: &[],
    },
    Template {
        user: "monitor",
        command: "python3 -m http.server 9000",
        port: Some(9000),
        service: None,
        file: None,
        workers: &[],
    },
    Template {
        user: "daemon",
        command: "cron -f",
        port: None,
        service: None,
        file: None,
        workers: &["run-parts /etc/cron.hourly"],
    },
];

fn elapsed_string(rng: &mut StdRng) -> String {
    let secs: i64 = rng.gen_range(30..12 * 3600);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

/// Generates the built-in process list. Deterministic for a given seed.
pub fn builtin_scenario(seed: u64) -> Vec<ProcessRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut processes = Vec::new();
    let mut next_pid: u32 = 100;

    for template in TEMPLATES {
        let pid = next_pid + rng.gen_range(0..7);
        next_pid = pid + 1;

        processes.push(ProcessRecord {
            pid,
            parent_pid: None,
            level: 0,
            user: template.user.to_string(),
            command: template.command.to_string(),
            cpu: rng.gen_range(0.0..0.6),
            memory: rng.gen_range(0.01..0.4),
            time: elapsed_string(&mut rng),
            port: template.port,
            service: template.service.map(str::to_string),
            file: template.file.map(str::to_string),
            transparency: if rng.gen_bool(0.25) {
                rng.gen_range(0.4..0.8)
            } else {
                1.0
            },
            state: ProcessState::Running,
        });

        for worker in template.workers {
            let worker_pid = next_pid + rng.gen_range(0..3);
            next_pid = worker_pid + 1;
            processes.push(ProcessRecord {
                pid: worker_pid,
                parent_pid: Some(pid),
                level: 1,
                user: template.user.to_string(),
                command: worker.to_string(),
                cpu: rng.gen_range(0.0..0.3),
                memory: rng.gen_range(0.01..0.15),
                time: elapsed_string(&mut rng),
                port: None,
                service: template.service.map(str::to_string),
                file: None,
                transparency: if rng.gen_bool(0.5) {
                    rng.gen_range(0.4..0.8)
                } else {
                    1.0
                },
                state: ProcessState::Running,
            });
        }
    }

    info!(count = processes.len(), seed, "generated builtin scenario");
    processes
}
