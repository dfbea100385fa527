// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, bag, error, grid, movegen};
use rand::prelude::*;

fn use_tiles<II: IntoIterator<Item = u8>>(rack: &mut Vec<u8>, tiles_iter: II) -> error::Returns<()> {
    for tile in tiles_iter {
        let pos = rack.iter().rposition(|&t| t == tile).ok_or("bad tile")?;
        rack.swap_remove(pos);
    }
    Ok(())
}

pub struct GamePlayer {
    pub score: i16,
    pub rack: Vec<u8>,
}

pub struct GameState {
    pub players: Box<[GamePlayer]>,
    pub grid: grid::Grid,
    pub bag: bag::Bag,
    pub turn: u8,
    pub rack_size: usize,
}

impl GameState {
    pub fn new(
        grid: grid::Grid,
        alphabet: &alphabet::Alphabet,
        num_players: u8,
        rack_size: usize,
    ) -> GameState {
        GameState {
            players: (0..num_players)
                .map(|_| GamePlayer {
                    score: 0,
                    rack: Vec::with_capacity(rack_size),
                })
                .collect(),
            grid,
            bag: bag::Bag::new(alphabet),
            turn: 0,
            rack_size,
        }
    }

    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    pub fn play(&mut self, play: &movegen::Play) -> error::Returns<()> {
        self.grid.apply(play);
        let rack_size = self.rack_size;
        let current_player = &mut self.players[self.turn as usize];
        current_player.score += play.score;
        use_tiles(&mut current_player.rack, play.used_tiles())?;
        self.bag.replenish(&mut current_player.rack, rack_size);
        Ok(())
    }

    // when no placement exists: put the whole rack back and redraw.
    pub fn exchange_all(&mut self, rng: &mut dyn RngCore) {
        let rack_size = self.rack_size;
        let current_player = &mut self.players[self.turn as usize];
        let tiles = std::mem::take(&mut current_player.rack);
        self.bag.put_back(rng, &tiles);
        self.bag.replenish(&mut current_player.rack, rack_size);
    }

    pub fn next_turn(&mut self) {
        self.turn += 1;
        if self.turn as usize >= self.players.len() {
            self.turn = 0;
        }
    }
}
