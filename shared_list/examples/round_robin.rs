//! Round-robin dispatch example
//! Worker threads pull backends from a shared list while a supervisor
//! thread swaps one backend out.
//!
//! Set `RUST_LOG` to override the default debug-level list events.

use shared_list::{ListConfig, ListResult, SharedList, init_tracing};
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(tracing::Level::DEBUG);

    let config = ListConfig::from_toml_str(
        r#"
name = "backends"
initial_capacity = 4
"#,
    )?;
    let backends: SharedList<String> = SharedList::with_config(&config);
    backends.add(["10.0.0.1:80", "10.0.0.2:80", "10.0.0.3:80"].map(String::from));

    let workers: Vec<_> = (0..3)
        .map(|id| {
            let backends = backends.clone();
            thread::spawn(move || -> ListResult<()> {
                for request in 0..5 {
                    let target = backends.try_next()?;
                    println!("Worker {}: request #{} -> {}", id, request, target);
                    thread::sleep(Duration::from_millis(10));
                }
                Ok(())
            })
        })
        .collect();

    let supervisor = {
        let backends = backends.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            if backends.replace(&"10.0.0.2:80".to_string(), "10.0.0.9:80".to_string()) {
                println!("Supervisor: replaced 10.0.0.2:80 with 10.0.0.9:80");
            }
        })
    };

    for worker in workers {
        worker.join().map_err(|_| "worker panicked")??;
    }
    supervisor.join().map_err(|_| "supervisor panicked")?;

    println!("Final backends: {:?}", &*backends.unpack());
    Ok(())
}
