//! spinlab — long-run slot machine RTP simulator
//!
//! Spins the fixed three-reel machine until interrupted, printing a
//! live RTP estimate once per second and a final summary on Ctrl+C.

use spinlab_engine::{PayTable, expected_rtp};
use spinlab_sim::{SimConfig, Simulation, final_summary};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let config = SimConfig::default();
    let paytable = PayTable::default();
    log::info!(
        "paytable loaded: analytic RTP {:.6}%, max multiplier {}x",
        expected_rtp(&paytable),
        paytable.max_multiplier()
    );

    println!("Starting slot machine RTP simulation...");
    println!("Press Ctrl+C to stop\n");

    let sim = Simulation::start(config);

    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the run cannot be stopped cleanly;
        // fall through and shut down rather than spin forever.
        log::error!("failed to install Ctrl+C handler: {e}");
    }

    println!("\n\nSimulation stopped by user.");

    match sim.shutdown() {
        Ok(totals) => {
            log::info!(
                "hit rate {:.4}% ({} wins, {} triples, {} jackpot triples, max win {:.1}x)",
                totals.hit_rate(),
                totals.wins,
                totals.triples,
                totals.jackpot_triples,
                totals.max_win_ratio
            );
            println!("\n{}", final_summary(&totals));
        }
        Err(e) => {
            log::error!("shutdown failed: {e}");
            std::process::exit(1);
        }
    }
}
