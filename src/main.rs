use core::simulator::CareerSimulator;
use core::utils::{SimulationRng, TimeEstimation};
use database::{ConfigLoader, SnapshotStore, TeamLoader, WorldGenerator};
use env_logger::Env;
use log::{info, warn};
use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEFAULT_SAVE_PATH: &str = "savegame.json.gz";
const DEFAULT_MONTHS: u32 = 12;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let save_path = env::var("SAVE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SAVE_PATH));

    let months = match env::var("MONTHS") {
        Ok(value) => value.parse::<u32>()?,
        Err(_) => DEFAULT_MONTHS,
    };

    let mut rng = match env::var("SEED") {
        Ok(value) => SimulationRng::from_seed(value.parse::<u64>()?),
        Err(_) => SimulationRng::from_entropy(),
    };

    let (config, estimated) = TimeEstimation::estimate(ConfigLoader::load);
    let config = config?;

    info!("config loaded: {} ms", estimated);

    let mut data = if save_path.exists() {
        SnapshotStore::load(&save_path)?
    } else {
        info!("no save found at {}, starting a new career", save_path.display());

        let teams = TeamLoader::load()?;
        WorldGenerator::generate(&config, &teams, &mut rng)?
    };

    for _ in 0..months {
        let (result, estimated) =
            TimeEstimation::estimate(|| CareerSimulator::advance_month(&mut data, &config, &mut rng));

        if !result.success {
            warn!("simulation stopped: {}", result.message);
            break;
        }

        info!("{} in {} ms", result, estimated);
    }

    if let Some(manager) = data.manager.as_ref() {
        info!(
            "manager: cash {}, reputation {}, office tier {}, {} represented players",
            manager.cash,
            manager.reputation,
            manager.office_tier,
            manager.represented_count()
        );
    }

    if let Some(leader) = data.table.sorted_rows().first() {
        let name = data.team(leader.team_id).map(|t| t.name.as_str()).unwrap_or("?");
        info!("league leader: {} with {} points", name, leader.points());
    }

    SnapshotStore::save(&data, &save_path)?;

    Ok(())
}
