use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn characters_light_up_in_order() {
    let total = 10;
    assert_eq!(char_opacity(0.0, 0, total), DIM_OPACITY);
    assert!(close(char_opacity(1.0, 9, total), 1.0));
    assert_eq!(char_progress(0.55, 4, total), 1.0);
    assert_eq!(char_progress(0.5, 5, total), 0.0);
    assert!(close(char_progress(0.55, 5, total), 0.5));
    assert_eq!(char_progress(0.2, 9, total), 0.0);
}

#[test]
fn empty_text_is_fully_revealed() {
    assert_eq!(char_progress(0.0, 0, 0), 1.0);
}

#[test]
fn paragraphs_partition_progress() {
    let reveal = TextReveal::new(["abcd", "efghijkl"]);
    assert_eq!(reveal.total_chars(), 12);
    // First paragraph spans the first third of progress.
    assert_eq!(reveal.paragraph_progress(0.5, 0), 1.0);
    assert_eq!(reveal.paragraph_progress(0.25, 1), 0.0);
    assert!(close(reveal.paragraph_progress(2.0 / 3.0, 1), 0.5));

    let ops = reveal.opacities(1.0);
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0].len(), 4);
    assert_eq!(ops[1].len(), 8);
    assert!(ops.iter().flatten().all(|&o| close(o, 1.0)));

    let dim = reveal.opacities(0.0);
    assert!(dim.iter().flatten().all(|&o| o == DIM_OPACITY));
}

#[test]
fn counts_unicode_scalars() {
    let reveal = TextReveal::new(["Créez", "été"]);
    assert_eq!(reveal.total_chars(), 8);
}
