use rand::{rngs::StdRng, RngCore, SeedableRng};
use rautomata_lib::{
    init,
    rules::{Elementary, FireRule, Life},
    Boundary, Config, Coord, Error, FireCell, FireConfig, Grid, Init, Pattern, State, World, ALIVE,
    DEAD,
};
use std::error::Error as StdError;

/// A random source that replays a fixed list of numbers.
struct Replay(Vec<u64>);

impl RngCore for Replay {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        if self.0.is_empty() {
            u64::MAX
        } else {
            self.0.remove(0)
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.next_u64() as u8;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

fn fire_config(width: i32, height: i32) -> Config {
    Config::new(width, height).set_fire(FireConfig::default())
}

#[test]
fn default() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::default().world()?;
    assert_eq!(world.active_count(), 5);
    world.run(4);
    assert_eq!(world.generation(), 4);
    assert_eq!(world.active_count(), 5);
    assert_eq!(world.rule_label(), "40");
    Ok(())
}

#[test]
fn glider_translates() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(10, 10).set_boundary(Boundary::Periodic);
    let mut world = World::new(&config, Life::standard())?;
    let shifted: Vec<Coord> = Pattern::Glider
        .centered(10, 10)
        .map(|(x, y)| (x + 1, y + 1))
        .collect();
    let mut rng = StdRng::seed_from_u64(0);
    let expected: Grid<State> = init::build(&Init::Live(shifted), 10, 10, &mut rng)?;
    world.run(4);
    assert_eq!(world.grid(), &expected);
    Ok(())
}

#[test]
fn glider_wraps_around() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(8, 8);
    let mut world = World::new(&config, Life::standard())?;
    let start = world.grid().clone();
    world.run(32);
    assert_eq!(world.grid(), &start);
    Ok(())
}

#[test]
fn rule_190_kills_everything() -> Result<(), Box<dyn StdError>> {
    // Live cells with 0, 2 and 8 live neighbors.
    let grid = Grid::parse(
        9,
        9,
        ".........\n\
         .o...ooo.\n\
         .........\n\
         .........\n\
         .........\n\
         ..ooo....\n\
         ..ooo....\n\
         ..ooo....\n\
         .........\n",
    )?;
    let config = Config::new(9, 9);
    let rng = StdRng::seed_from_u64(0);
    let mut world = World::from_grid(&config, Life::from_id("190")?, grid, rng)?;
    let before = world.grid().clone();
    world.step();
    for coord in [(1, 1), (6, 1), (3, 6)] {
        assert_eq!(before.get(coord), Some(ALIVE));
        assert_eq!(world.grid().get(coord), Some(DEAD));
    }
    for (old, new) in before.cells().iter().zip(world.grid().cells()) {
        if *old == ALIVE {
            assert_eq!(*new, DEAD);
        }
    }
    Ok(())
}

#[test]
fn fixed_edges_stay() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(31, 1)
        .set_boundary(Boundary::Fixed)
        .set_init(Init::Random { probability: 0.5 })
        .set_seed(30);
    let mut world = World::new(&config, Elementary::decode(30)?)?;
    let left = world.grid().get((0, 0));
    let right = world.grid().get((30, 0));
    world.run_with(50, |_, view| {
        assert_eq!(view.get((0, 0)), left);
        assert_eq!(view.get((30, 0)), right);
    });
    assert_eq!(world.generation(), 50);
    Ok(())
}

#[test]
fn periodic_matches_modular_indexing() -> Result<(), Box<dyn StdError>> {
    let rule = Elementary::decode(110)?;
    let config = Config::new(17, 1)
        .set_boundary(Boundary::Periodic)
        .set_init(Init::Random { probability: 0.5 })
        .set_seed(110);
    let mut world = World::new(&config, rule)?;
    for _ in 0..20 {
        let cells = world.grid().cells().to_vec();
        let n = cells.len();
        let expected: Vec<State> = (0..n)
            .map(|i| rule.apply(cells[(i + n - 1) % n], cells[i], cells[(i + 1) % n]))
            .collect();
        world.step();
        assert_eq!(world.grid().cells(), &expected[..]);
    }
    Ok(())
}

#[test]
fn rule_90_from_center() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(9, 1)
        .set_elementary([90])
        .set_init(Init::Pattern(Pattern::Center));
    let mut world = config.world()?;
    assert_eq!(world.plaintext(), "....o....\n");
    world.step();
    assert_eq!(world.plaintext(), "...o.o...\n");
    world.step();
    assert_eq!(world.plaintext(), "..o...o..\n");
    Ok(())
}

#[test]
fn single_cell_periodic() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(1, 1)
        .set_boundary(Boundary::Periodic)
        .set_init(Init::Live(vec![(0, 0)]));
    let mut life = World::new(&config, Life::standard())?;
    life.step();
    assert_eq!(life.grid().get((0, 0)), Some(DEAD));
    life.step();
    assert_eq!(life.grid().get((0, 0)), Some(DEAD));

    // Rule 204 keeps the center cell as it is.
    let mut identity = World::new(&config, Elementary::decode(204)?)?;
    identity.run(5);
    assert_eq!(identity.grid().get((0, 0)), Some(ALIVE));
    Ok(())
}

#[test]
fn deterministic_reruns() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(20, 20)
        .set_life(["63", "40"])
        .set_steps_per_rule(5)
        .set_init(Init::Random { probability: 0.3 })
        .set_seed(3);
    let mut a = config.world()?;
    let mut b = config.world()?;
    for _ in 0..30 {
        a.step();
        b.step();
        assert_eq!(a.plaintext(), b.plaintext());
    }
    Ok(())
}

#[test]
fn schedule_switches_rules() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(8, 8)
        .set_life(["40", "190"])
        .set_steps_per_rule(2);
    let mut world = config.world()?;
    let mut labels = Vec::new();
    for _ in 0..5 {
        labels.push(world.rule_label());
        world.step();
    }
    assert_eq!(labels, ["40", "40", "190", "190", "40"]);
    Ok(())
}

#[test]
fn water_is_inert() -> Result<(), Box<dyn StdError>> {
    let grid = Grid::parse(5, 3, "TT~TT\n*~~~T\nTT~T*\n")?;
    let config = fire_config(5, 3).set_boundary(Boundary::Periodic);
    let rule = FireRule::new(1.0)?;
    let mut world = World::from_grid(&config, rule, grid, StdRng::seed_from_u64(1))?;
    let water: Vec<bool> = world
        .grid()
        .cells()
        .iter()
        .map(|&c| c == FireCell::Water)
        .collect();
    world.run_with(10, |_, view| {
        for (&cell, &was_water) in view.cells().iter().zip(&water) {
            assert_eq!(cell == FireCell::Water, was_water);
        }
    });
    assert!(world.is_settled());
    Ok(())
}

#[test]
fn seeded_fire_is_reproducible() -> Result<(), Box<dyn StdError>> {
    let config = fire_config(24, 24)
        .set_init(Init::Random { probability: 0.8 })
        .set_seed(2024);
    let mut a = World::new(&config, FireRule::default())?;
    let mut b = World::new(&config, FireRule::default())?;
    a.ignite((12, 12))?;
    b.ignite((12, 12))?;
    for _ in 0..25 {
        a.step();
        b.step();
        assert_eq!(a.grid(), b.grid());
    }

    let mut c = config.world()?;
    let mut d = config.world()?;
    c.run(25);
    d.run(25);
    assert_eq!(c.plaintext(), d.plaintext());
    Ok(())
}

#[test]
fn independent_ignition_rolls() -> Result<(), Box<dyn StdError>> {
    let config = fire_config(3, 1);
    let rule = FireRule::new(0.5)?;

    // The first burning neighbor fails, the second one succeeds.
    let grid = Grid::parse(3, 1, "*T*\n")?;
    let mut world = World::from_grid(&config, rule, grid, Replay(vec![u64::MAX, 0]))?;
    world.step();
    assert_eq!(world.grid().plaintext(), "x*x\n");

    // Both fail.
    let grid = Grid::parse(3, 1, "*T*\n")?;
    let mut world = World::from_grid(&config, rule, grid, Replay(vec![u64::MAX, u64::MAX]))?;
    world.step();
    assert_eq!(world.grid().plaintext(), "xTx\n");
    Ok(())
}

#[test]
fn wind_shifts_the_fire() -> Result<(), Box<dyn StdError>> {
    let config = fire_config(5, 5).set_init(Init::Random { probability: 1.0 });
    let rule = FireRule::new(1.0)?.set_wind((1, 0))?;
    let mut world = World::new(&config, rule)?;
    world.ignite((2, 2))?;
    world.step();
    assert_eq!(
        world.grid().plaintext(),
        "TTTTT\n\
         TT***\n\
         TTxT*\n\
         TT***\n\
         TTTTT\n"
    );
    Ok(())
}

#[test]
fn humidity_stops_the_fire() -> Result<(), Box<dyn StdError>> {
    let config = fire_config(5, 5).set_init(Init::Random { probability: 1.0 });
    let rule = FireRule::new(0.2)?.set_humidity(1.0)?;
    let mut world = World::new(&config, rule)?;
    world.ignite((2, 2))?;
    assert!(!world.is_settled());
    world.step();
    assert_eq!(world.burning_count(), 0);
    assert_eq!(world.grid().count(|c| c == FireCell::Healthy), 24);
    assert!(world.is_settled());
    Ok(())
}

#[test]
fn extinguish_and_ignite() -> Result<(), Box<dyn StdError>> {
    let grid = Grid::parse(4, 4, "****\n****\n****\n****\n")?;
    let config = fire_config(4, 4);
    let rng = StdRng::seed_from_u64(0);
    let mut world = World::from_grid(&config, FireRule::default(), grid, rng)?;
    assert_eq!(world.extinguish((2, 2), 2), 4);
    assert_eq!(world.burning_count(), 12);
    assert_eq!(world.grid().get((1, 1)), Some(FireCell::Healthy));
    assert_eq!(world.grid().get((3, 3)), Some(FireCell::Burning));
    assert_eq!(world.ignite((4, 0)), Err(Error::OutOfBounds((4, 0))));
    Ok(())
}

#[test]
fn water_never_ignites() -> Result<(), Box<dyn StdError>> {
    let config = fire_config(3, 3).set_init(Init::Plaintext(String::from("TTT\nT~T\nTTT\n")));
    let world = config.world()?;
    assert_eq!(world.glyph((1, 1)), Some('~'));
    assert_eq!(world.active_count(), 0);
    assert!(world.is_settled());

    let mut world = World::new(&config, FireRule::default())?;
    assert_eq!(world.ignite((1, 1)), Ok(false));
    assert_eq!(world.grid().get((1, 1)), Some(FireCell::Water));
    assert_eq!(world.ignite((1, 0)), Ok(true));
    assert_eq!(world.ignite((1, 0)), Ok(false));
    assert_eq!(world.burning_count(), 1);
    Ok(())
}

#[test]
fn changing_weather() -> Result<(), Box<dyn StdError>> {
    let fire = FireConfig {
        weather_interval: Some(2),
        ..FireConfig::default()
    };
    let config = fire_config(16, 16)
        .set_fire(fire.clone())
        .set_init(Init::Random { probability: 0.9 })
        .set_seed(7);

    let mut world = World::new(&config, fire.rule()?)?;
    world.run(2);
    assert_eq!(world.automaton().humidity(), 0.0);
    world.step();
    let humidity = world.automaton().humidity();
    assert!(humidity > 0.0 && humidity <= 1.0);
    world.step();
    assert_eq!(world.automaton().humidity(), humidity);

    let mut a = config.world()?;
    let mut b = config.world()?;
    let mut labels = Vec::new();
    for _ in 0..20 {
        a.step();
        b.step();
        assert_eq!(a.plaintext(), b.plaintext());
        assert_eq!(a.rule_label(), b.rule_label());
        labels.push(a.rule_label());
    }
    labels.dedup();
    assert!(labels.len() > 1);
    Ok(())
}

#[test]
fn fire_ignites_center_by_default() -> Result<(), Box<dyn StdError>> {
    let config = fire_config(9, 9).set_init(Init::Random { probability: 1.0 });
    let mut world = config.world()?;
    assert_eq!(world.glyph((4, 4)), Some('*'));
    assert_eq!(world.color((4, 4)), Some((255, 0, 0)));
    assert_eq!(world.active_count(), 1);
    world.step();
    assert_eq!(world.glyph((4, 4)), Some('x'));
    Ok(())
}

#[test]
fn config_errors() {
    let life = Config::new(8, 8);
    assert_eq!(
        life.clone().set_boundary(Boundary::Fixed).world().err(),
        Some(Error::UnsupportedBoundary(Boundary::Fixed))
    );
    assert_eq!(
        life.clone().set_life(Vec::<String>::new()).world().err(),
        Some(Error::EmptyRuleList)
    );
    assert_eq!(
        life.clone().set_life(["wat"]).world().err(),
        Some(Error::UnknownRule(String::from("wat")))
    );
    assert_eq!(
        life.clone().set_steps_per_rule(0).world().err(),
        Some(Error::NonPositiveError)
    );
    assert_eq!(
        Config::new(0, 8).world().err(),
        Some(Error::NonPositiveError)
    );
    assert_eq!(
        Config::new(31, 5).set_elementary([30]).world().err(),
        Some(Error::DimensionMismatch {
            expected: (31, 1),
            found: (31, 5)
        })
    );
    assert_eq!(
        Config::new(31, 1).set_elementary([256]).world().err(),
        Some(Error::InvalidRule(256))
    );
    assert_eq!(
        Config::new(31, 1)
            .set_elementary([30])
            .set_boundary(Boundary::Reflecting)
            .world()
            .err(),
        Some(Error::UnsupportedBoundary(Boundary::Reflecting))
    );
    let windy = FireConfig {
        wind: (2, 0),
        ..FireConfig::default()
    };
    assert_eq!(
        Config::new(8, 8).set_fire(windy).world().err(),
        Some(Error::InvalidWind((2, 0)))
    );
}

#[test]
fn grid_size_must_match() -> Result<(), Box<dyn StdError>> {
    let grid = Grid::<State>::new(4, 4)?;
    let result = World::from_grid(
        &Config::new(5, 4),
        Life::standard(),
        grid,
        StdRng::seed_from_u64(0),
    );
    assert_eq!(
        result.err(),
        Some(Error::DimensionMismatch {
            expected: (5, 4),
            found: (4, 4)
        })
    );
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn json_config() -> Result<(), Box<dyn StdError>> {
    let config: Config = serde_json::from_str(
        r#"{
            "width": 8,
            "height": 1,
            "automaton": { "elementary": { "rules": [90] } },
            "boundary": "periodic",
            "init": { "pattern": "center" }
        }"#,
    )?;
    assert_eq!(config.steps_per_rule, 20);
    let mut world = config.world()?;
    assert_eq!(world.plaintext(), "...o....\n");
    world.step();
    assert_eq!(world.plaintext(), "..o.o...\n");
    Ok(())
}
