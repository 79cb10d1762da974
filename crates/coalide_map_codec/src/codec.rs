//! Conversion between a `GridStore` and a `LevelDocument`

use crate::document::{
    CrateRecord, EnemyRecord, LevelDocument, LevelInfo, MushroomRecord, ObjectRecords,
    OnionRecord, PlayerRecord, RamRecord, RockRecord, TerrainGrids, TextureGrids,
};
use crate::LevelError;
use coalide_map_core::{GridStore, ObjectCell, ObjectType, TerrainCell, TerrainSeeds, MAX_DIMENSION};

/// Project the active rectangle of a store into a document
pub fn export(store: &GridStore) -> LevelDocument {
    let (rows, cols) = (store.rows(), store.cols());
    let grid = |f: &dyn Fn(usize, usize) -> i32| -> Vec<Vec<i32>> {
        (0..rows)
            .map(|r| (0..cols).map(|c| f(r, c)).collect())
            .collect()
    };

    let textures = TextureGrids {
        water_decals: grid(&|r, c| store.background(r, c).t_water_decal),
        water: grid(&|r, c| store.background(r, c).t_water),
        grass: grid(&|r, c| store.terrain(r, c).t_dirt),
        ice: grid(&|r, c| store.terrain(r, c).t_ice),
        sand: grid(&|r, c| store.terrain(r, c).t_sand),
    };

    let terrain = TerrainGrids {
        types: (0..rows)
            .map(|r| (0..cols).map(|c| store.terrain(r, c).ttype).collect())
            .collect(),
        zones: (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| store.terrain(r, c).zones().iter().copied().collect())
                    .collect()
            })
            .collect(),
    };

    let mut objects = ObjectRecords::default();
    let mut player = None;
    for (row, col) in store.active_cells() {
        let obj = store.object(row, col);
        match obj.otype {
            ObjectType::Empty => {}
            ObjectType::Player => {
                player = Some(PlayerRecord {
                    row,
                    col,
                    mass: obj.mass,
                    impulse: obj.impulse,
                });
            }
            ObjectType::Rock => objects.rocks.push(RockRecord { row, col }),
            ObjectType::Crate => objects.crates.push(CrateRecord {
                row,
                col,
                mass: obj.mass,
            }),
            ObjectType::Acorn => objects.acorns.push(enemy_record(row, col, obj)),
            ObjectType::Onion => objects.onions.push(OnionRecord {
                enemy: enemy_record(row, col, obj),
                self_stun_dur: obj.self_stun_dur,
                player_stun_dur: obj.player_stun_dur,
            }),
            ObjectType::Ram => objects.rams.push(RamRecord {
                enemy: enemy_record(row, col, obj),
                player_stun_dur: obj.player_stun_dur,
            }),
            ObjectType::Mushroom => objects.mushrooms.push(MushroomRecord {
                row,
                col,
                aggro_zone: obj.aggro_zone,
                aggro_radius: obj.aggro_radius,
                mass: obj.mass,
                spawn_mass: obj.spawn_mass,
                spawn_dash_cooldown: obj.cooldown,
                spawn_impulse: obj.impulse,
                spawn_rate: obj.spawn_rate,
            }),
        }
    }
    objects.player = player.into();

    LevelDocument {
        level_info: LevelInfo { rows, cols },
        textures: Some(textures),
        terrain,
        objects,
    }
}

fn enemy_record(row: usize, col: usize, obj: &ObjectCell) -> EnemyRecord {
    EnemyRecord {
        row,
        col,
        aggro_zone: obj.aggro_zone,
        patrol_zone: obj.patrol_zone,
        aggro_radius: obj.aggro_radius,
        mass: obj.mass,
        dash_cooldown: obj.cooldown,
        impulse: obj.impulse,
    }
}

fn check_grid<T>(name: &str, grid: &[Vec<T>], rows: usize, cols: usize) -> Result<(), LevelError> {
    if grid.len() != rows {
        return Err(LevelError::MalformedDocument(format!(
            "'{}' has {} rows, expected {}",
            name,
            grid.len(),
            rows
        )));
    }
    if let Some((r, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(LevelError::MalformedDocument(format!(
            "'{}' row {} has {} columns, expected {}",
            name,
            r,
            row.len(),
            cols
        )));
    }
    Ok(())
}

/// Build a fresh store from a document.
///
/// Nothing is written anywhere until the whole document has been checked,
/// so a failed import leaves the caller's store untouched.
pub fn import(doc: &LevelDocument, seeds: &TerrainSeeds) -> Result<GridStore, LevelError> {
    if let Some(key) = doc.objects.unknown.keys().next() {
        return Err(LevelError::UnknownObjectType(key.clone()));
    }

    let LevelInfo { rows, cols } = doc.level_info;
    if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&cols) {
        return Err(LevelError::MalformedDocument(format!(
            "level size {}x{} outside 1..={}",
            rows, cols, MAX_DIMENSION
        )));
    }

    check_grid("terrain.types", &doc.terrain.types, rows, cols)?;
    check_grid("terrain.zones", &doc.terrain.zones, rows, cols)?;
    if let Some(textures) = &doc.textures {
        check_grid("textures.waterDecals", &textures.water_decals, rows, cols)?;
        check_grid("textures.water", &textures.water, rows, cols)?;
        check_grid("textures.grass", &textures.grass, rows, cols)?;
        check_grid("textures.ice", &textures.ice, rows, cols)?;
        check_grid("textures.sand", &textures.sand, rows, cols)?;
    }

    let mut store = GridStore::new();
    store.resize(rows, cols)?;

    for r in 0..rows {
        for c in 0..cols {
            let mut cell = TerrainCell::with_seeds(doc.terrain.types[r][c], seeds);
            for &zone in &doc.terrain.zones[r][c] {
                cell.add_zone(zone);
            }
            if let Some(textures) = &doc.textures {
                cell.t_dirt = textures.grass[r][c];
                cell.t_ice = textures.ice[r][c];
                cell.t_sand = textures.sand[r][c];

                let background = store.background_mut(r, c);
                background.t_water = textures.water[r][c];
                background.t_water_decal = textures.water_decals[r][c];
            }
            store.set_terrain(r, c, cell);
        }
    }

    let mut place = |group: &str, row: usize, col: usize, obj: ObjectCell| {
        if row >= rows || col >= cols {
            return Err(LevelError::MalformedDocument(format!(
                "{} at ({}, {}) is outside the {}x{} level",
                group, row, col, rows, cols
            )));
        }
        store.set_object(row, col, obj);
        Ok(())
    };

    let objects = &doc.objects;

    if let Some(p) = objects.player.record() {
        let mut obj = ObjectCell::new(ObjectType::Player);
        obj.mass = p.mass;
        obj.impulse = p.impulse;
        place("player", p.row, p.col, obj)?;
    }

    for rock in &objects.rocks {
        place("rocks", rock.row, rock.col, ObjectCell::new(ObjectType::Rock))?;
    }

    for crate_record in &objects.crates {
        let mut obj = ObjectCell::new(ObjectType::Crate);
        obj.mass = crate_record.mass;
        place("crates", crate_record.row, crate_record.col, obj)?;
    }

    for acorn in &objects.acorns {
        let obj = enemy_object(ObjectType::Acorn, acorn);
        place("acorns", acorn.row, acorn.col, obj)?;
    }

    for onion in &objects.onions {
        let mut obj = enemy_object(ObjectType::Onion, &onion.enemy);
        obj.self_stun_dur = onion.self_stun_dur;
        obj.player_stun_dur = onion.player_stun_dur;
        place("onions", onion.enemy.row, onion.enemy.col, obj)?;
    }

    for ram in &objects.rams {
        let mut obj = enemy_object(ObjectType::Ram, &ram.enemy);
        obj.player_stun_dur = ram.player_stun_dur;
        place("rams", ram.enemy.row, ram.enemy.col, obj)?;
    }

    for m in &objects.mushrooms {
        let mut obj = ObjectCell::new(ObjectType::Mushroom);
        obj.aggro_zone = m.aggro_zone;
        obj.aggro_radius = m.aggro_radius;
        obj.mass = m.mass;
        obj.spawn_mass = m.spawn_mass;
        obj.cooldown = m.spawn_dash_cooldown;
        obj.impulse = m.spawn_impulse;
        obj.spawn_rate = m.spawn_rate;
        place("mushrooms", m.row, m.col, obj)?;
    }

    Ok(store)
}

fn enemy_object(otype: ObjectType, record: &EnemyRecord) -> ObjectCell {
    let mut obj = ObjectCell::new(otype);
    obj.aggro_zone = record.aggro_zone;
    obj.patrol_zone = record.patrol_zone;
    obj.aggro_radius = record.aggro_radius;
    obj.mass = record.mass;
    obj.cooldown = record.dash_cooldown;
    obj.impulse = record.impulse;
    obj
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PlayerSlot;
    use coalide_map_core::{ObjectParam, TerrainType, NO_TEXTURE};

    fn sample_store() -> GridStore {
        let mut store = GridStore::new();
        store.resize(4, 5).unwrap();

        store.set_terrain(1, 1, TerrainCell::new(TerrainType::Dirt));
        store.set_terrain(1, 2, TerrainCell::new(TerrainType::Sand));
        store.terrain_mut(1, 1).add_zone(3);
        store.terrain_mut(1, 2).add_zone(3);
        store.terrain_mut(1, 2).add_zone(1);

        let mut player = ObjectCell::new(ObjectType::Player);
        player.mass = 12;
        store.set_object(0, 0, player);

        let mut onion = ObjectCell::new(ObjectType::Onion);
        onion.set_parameter(ObjectParam::AggroZone, 3);
        onion.set_parameter(ObjectParam::SelfStunDur, 15);
        store.set_object(2, 3, onion);

        let mut mushroom = ObjectCell::new(ObjectType::Mushroom);
        mushroom.set_parameter(ObjectParam::SpawnRate, 25);
        store.set_object(3, 4, mushroom);

        store.set_object(3, 0, ObjectCell::new(ObjectType::Rock));
        store
    }

    #[test]
    fn test_export_shape() {
        let doc = export(&sample_store());

        assert_eq!(doc.level_info, LevelInfo { rows: 4, cols: 5 });
        assert_eq!(doc.terrain.types.len(), 4);
        assert_eq!(doc.terrain.types[0].len(), 5);
        assert_eq!(doc.terrain.types[1][2], TerrainType::Sand);
        assert_eq!(doc.terrain.zones[1][2], vec![1, 3]);
        assert!(doc.terrain.zones[0][0].is_empty());

        let textures = doc.textures.as_ref().unwrap();
        assert_eq!(textures.sand[1][2], 145);
        assert_eq!(textures.grass[0][0], NO_TEXTURE);

        let player = doc.objects.player.record().unwrap();
        assert_eq!((player.row, player.col, player.mass), (0, 0, 12));
        assert_eq!(doc.objects.rocks, vec![RockRecord { row: 3, col: 0 }]);
        assert_eq!(doc.objects.onions[0].enemy.aggro_zone, 3);
        assert_eq!(doc.objects.onions[0].self_stun_dur, 15);
        assert_eq!(doc.objects.mushrooms[0].spawn_rate, 25);
        assert!(doc.objects.crates.is_empty());
    }

    #[test]
    fn test_export_skips_cells_outside_active_rect() {
        let mut store = sample_store();
        store.set_object(10, 10, ObjectCell::new(ObjectType::Crate));
        let doc = export(&store);
        assert!(doc.objects.crates.is_empty());
    }

    #[test]
    fn test_no_player_exports_empty_slot() {
        let mut store = sample_store();
        store.set_object(0, 0, ObjectCell::empty());
        assert_eq!(export(&store).objects.player, PlayerSlot::default());
    }

    #[test]
    fn test_import_restores_store() {
        let store = sample_store();
        let restored = import(&export(&store), &TerrainSeeds::default()).unwrap();
        assert_eq!(restored, store);
    }

    #[test]
    fn test_import_without_textures_uses_seeds() {
        let mut doc = export(&sample_store());
        doc.textures = None;

        let store = import(&doc, &TerrainSeeds::default()).unwrap();
        assert_eq!(store.terrain(1, 2).t_ice, 139);
        assert_eq!(store.background(1, 2).t_water, NO_TEXTURE);
    }

    #[test]
    fn test_import_rejects_bad_size() {
        let mut doc = export(&sample_store());
        doc.level_info.rows = 100;
        assert!(matches!(
            import(&doc, &TerrainSeeds::default()),
            Err(LevelError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_import_rejects_ragged_grid() {
        let mut doc = export(&sample_store());
        doc.terrain.zones[2].pop();
        let err = import(&doc, &TerrainSeeds::default()).unwrap_err();
        assert!(err.to_string().contains("terrain.zones"));
    }

    #[test]
    fn test_import_rejects_object_outside_level() {
        let mut doc = export(&sample_store());
        doc.objects.rocks.push(RockRecord { row: 4, col: 0 });
        assert!(matches!(
            import(&doc, &TerrainSeeds::default()),
            Err(LevelError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_import_rejects_unknown_group() {
        let mut doc = export(&sample_store());
        doc.objects
            .unknown
            .insert("dragons".to_string(), serde_json::json!([]));
        match import(&doc, &TerrainSeeds::default()) {
            Err(LevelError::UnknownObjectType(name)) => assert_eq!(name, "dragons"),
            other => panic!("Expected unknown object type, got {:?}", other),
        }
    }

    #[test]
    fn test_zones_on_empty_cells_are_dropped() {
        let mut doc = export(&sample_store());
        doc.terrain.zones[0][0] = vec![9];
        let store = import(&doc, &TerrainSeeds::default()).unwrap();
        assert!(store.terrain(0, 0).zones().is_empty());
    }
}
