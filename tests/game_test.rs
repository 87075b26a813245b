//! End-to-end tests of a full game session

use std::io::Cursor;

use detective_quest::domain::mansion::{GARDEN, HALL, LIBRARY};
use detective_quest::{play, Ending, KeyBindings};

fn play_with(input: &str) -> (detective_quest::Journey, String) {
    let mut out = Vec::new();
    let journey = play(
        KeyBindings::default(),
        &mut Cursor::new(input.as_bytes()),
        &mut out,
    )
    .expect("game runs");
    (journey, String::from_utf8(out).unwrap())
}

#[test]
fn given_right_right_quit_when_playing_then_journey_ends_in_garden() {
    let (journey, _) = play_with("d\nd\ns\n");

    assert_eq!(journey.path, vec![HALL, LIBRARY, GARDEN]);
    assert_eq!(journey.ending, Ending::DeadEnd);
    assert_eq!(journey.released, 8);
}

#[test]
fn given_eof_when_playing_then_whole_mansion_is_still_released() {
    let (journey, _) = play_with("");

    assert_eq!(journey.path, vec![HALL]);
    assert_eq!(journey.ending, Ending::InputClosed);
    assert_eq!(journey.released, 8);
}

#[test]
fn given_session_when_playing_then_transcript_is_framed_by_welcome_and_goodbye() {
    let (_, out) = play_with("s\n");

    assert!(out.starts_with(
        "Bem-vindo(a) ao Detective Quest - exploração da mansão.\n\
         Você começará no Hall de entrada. Explore escolhendo 'e' (esquerda), 'd' (direita) ou 's' (sair).\n\n\
         Você está no Hall de entrada: Hall de Entrada\n"
    ));
    assert!(out.ends_with(
        "--- Caminho percorrido ---\n\
         Hall de Entrada\n\
         -------------------------\n\
         \nExploração encerrada. Obrigado por jogar Detective Quest (demo).\n"
    ));
}
