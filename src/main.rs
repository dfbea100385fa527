// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use wordgrid::{alphabet, board_layout, dictionary, display, error, game_state, grid, movegen};

// Greedy two-player self-play: each turn generates every legal placement for
// the current rack and applies the top scorer. words.txt is required;
// tiles.txt and board.txt fall back to the standard English setup.
fn main() -> error::Returns<()> {
    let dict = dictionary::Dictionary::from_word_list(&std::fs::read_to_string("words.txt")?)?;
    let alphabet = match std::fs::read_to_string("tiles.txt") {
        Ok(giant_string) => alphabet::Alphabet::from_tile_table(&giant_string)?,
        Err(_) => alphabet::make_english_alphabet(),
    };
    let board = match std::fs::read_to_string("board.txt") {
        Ok(giant_string) => grid::Grid::parse(&giant_string)?,
        Err(_) => grid::Grid::new(&board_layout::make_standard_board_layout()),
    };

    let mut rng = rand_chacha::ChaCha20Rng::from_rng(&mut rand::rng());
    let mut game = game_state::GameState::new(board, &alphabet, 2, 7);
    game.bag.shuffle(&mut rng);
    println!("bag: {}", alphabet.fmt_rack(&game.bag.0));
    let rack_size = game.rack_size;
    for player in game.players.iter_mut() {
        game.bag.replenish(&mut player.rack, rack_size);
    }

    let mut zero_turns = 0;
    loop {
        display::print_board(&alphabet, &game.grid);
        for (i, player) in (1..).zip(game.players.iter()) {
            print!("player {}: {}, ", i, player.score);
        }
        println!("turn: player {}", game.turn + 1);
        println!(
            "pool {:2}: {}",
            game.bag.0.len(),
            alphabet.fmt_rack(&game.bag.0)
        );
        for (i, player) in (1..).zip(game.players.iter()) {
            println!("p{} rack: {}", i, alphabet.fmt_rack(&player.rack));
        }

        let word_search = movegen::WordSearch {
            grid: &game.grid,
            dict: &dict,
            alphabet: &alphabet,
        };
        let mut plays = word_search.gen_plays(&game.current_player().rack);
        plays.sort_unstable_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| (a.down, a.lane, a.idx).cmp(&(b.down, b.lane, b.idx)))
                .then_with(|| a.word.cmp(&b.word))
        });
        println!("found {} moves", plays.len());
        for play in plays.iter().take(10) {
            println!("{} {}", play.score, play.fmt(&alphabet));
        }

        match plays.first() {
            Some(play) => {
                println!("making top move: {}", play.fmt(&alphabet));
                game.play(play)?;
                if play.score != 0 {
                    zero_turns = 0;
                } else {
                    zero_turns += 1;
                }
            }
            None => {
                println!("no move found, exchanging rack");
                game.exchange_all(&mut rng);
                zero_turns += 1;
            }
        }

        if game.current_player().rack.is_empty() {
            display::print_board(&alphabet, &game.grid);
            println!("player {} went out", game.turn + 1);
            let other = 1 - game.turn as usize;
            let bonus = 2 * alphabet.rack_score(&game.players[other].rack);
            game.players[game.turn as usize].score += bonus;
            break;
        }

        if zero_turns >= game.players.len() * 3 {
            display::print_board(&alphabet, &game.grid);
            println!("game ended by consecutive zero-score turns");
            for player in game.players.iter_mut() {
                player.score -= alphabet.rack_score(&player.rack);
            }
            break;
        }

        game.next_turn();
    }

    for (i, player) in (1..).zip(game.players.iter()) {
        print!("player {}: {}, ", i, player.score);
    }
    println!("final scores");
    Ok(())
}
