use asm24::preprocess::expand;

#[test]
fn macro_body_replaces_the_call_line() {
    let src = "\
mcro m_step
  inc r1
  bne LOOP
mcroend
MAIN: mov r1, r2
m_step
stop
";
    let (out, msgs) = expand("t.as", src);
    assert!(msgs.is_empty());
    assert_eq!(out, "MAIN: mov r1, r2\n  inc r1\n  bne LOOP\nstop\n");
}

#[test]
fn a_macro_may_be_called_twice() {
    let src = "mcro twice\nstop\nmcroend\ntwice\ntwice\n";
    let (out, msgs) = expand("t.as", src);
    assert!(msgs.is_empty());
    assert_eq!(out, "stop\nstop\n");
}

#[test]
fn call_must_stand_alone_on_its_line() {
    let src = "mcro m1\ninc r1\nmcroend\nm1 r2\n  m1  \n";
    let (out, msgs) = expand("t.as", src);
    assert!(msgs.is_empty());
    // `m1 r2` is not a call; `  m1  ` is
    assert_eq!(out, "m1 r2\ninc r1\n");
}

#[test]
fn reserved_and_malformed_names_are_reported() {
    for name in ["mov", "r0", "r8", "1bad", "bad-name"] {
        let src = format!("mcro {name}\nmcroend\n");
        let (_, msgs) = expand("t.as", &src);
        assert_eq!(msgs.len(), 1, "case: {name}");
    }
    // a bad name still collects its body
    let src = "mcro r8\nstop\nmcroend\nr8\n";
    let (out, msgs) = expand("t.as", src);
    assert_eq!(msgs.len(), 1);
    assert_eq!(out, "stop\n");
}

#[test]
fn junk_after_mcroend_is_an_error_but_still_closes() {
    let src = "mcro m1\ninc r1\nmcroend junk\nm1\n";
    let (out, msgs) = expand("t.as", src);
    assert_eq!(msgs.len(), 1);
    assert_eq!(out, "inc r1\n");
}

#[test]
fn junk_after_the_macro_name_is_an_error() {
    let src = "mcro m1 extra\nmcroend\n";
    let (_, msgs) = expand("t.as", src);
    assert_eq!(msgs.len(), 1);
}

#[test]
fn mcro_without_a_name_passes_through() {
    let src = "mcro\nstop\n";
    let (out, msgs) = expand("t.as", src);
    assert_eq!(msgs.len(), 1);
    assert_eq!(out, "mcro\nstop\n");
}

#[test]
fn definitions_do_not_nest() {
    // while defining, a further `mcro` line is just body text
    let src = "mcro outer\nmcro inner\ninc r1\nmcroend\nouter\n";
    let (out, msgs) = expand("t.as", src);
    assert!(msgs.is_empty());
    assert_eq!(out, "mcro inner\ninc r1\n");
}

#[test]
fn calls_are_not_recognized_inside_a_body() {
    let src = "mcro a\nstop\nmcroend\nmcro b\na\nmcroend\nb\n";
    let (out, msgs) = expand("t.as", src);
    assert!(msgs.is_empty());
    // `a` was stored literally in b's body, not expanded at definition time
    assert_eq!(out, "a\n");
}
