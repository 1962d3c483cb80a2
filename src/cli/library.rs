//! A small library of literary trivia, and a query against it.

use otter_fol::structures::{
    formula::Formula,
    literal::{Literal, Predicate},
    term::{Constant, Term},
};

pub const AUTHORED: &str = "is_author_of";
pub const MAIN_ACTOR: &str = "is_main_actor_of";
pub const LIVED_EARLIER: &str = "lived_earlier_than";

fn fact(subject: &str, relation: &str, object: &str) -> Predicate {
    Predicate::new(
        Term::constant(subject),
        Constant::new(relation),
        Term::constant(object),
    )
}

/// Who wrote what, who stars in what, and who came first.
pub fn facts() -> Vec<Predicate> {
    vec![
        fact("pushkin", AUTHORED, "vystrel"),
        fact("dostoevsky", AUTHORED, "crime_and_punishment"),
        fact("dostoevsky", AUTHORED, "idiot"),
        fact("silvio", MAIN_ACTOR, "vystrel"),
        fact("raskolnikov", MAIN_ACTOR, "crime_and_punishment"),
        fact("mishkin", MAIN_ACTOR, "idiot"),
        fact("pushkin", LIVED_EARLIER, "dostoevsky"),
    ]
}

/// Who lived earlier than the author of the work in which Mishkin is the main actor?
pub fn query() -> Formula {
    let lived_earlier = Predicate::new(
        Term::variable("X"),
        Constant::new(LIVED_EARLIER),
        Term::variable("Y"),
    );

    let authored = Predicate::new(
        Term::variable("Y"),
        Constant::new(AUTHORED),
        Term::variable("Z"),
    );

    let main_actor = Predicate::new(
        Term::constant("mishkin"),
        Constant::new(MAIN_ACTOR),
        Term::variable("Z"),
    );

    Formula::and(
        Formula::and(
            Formula::and(Literal::answer(Term::variable("X")), lived_earlier),
            authored,
        ),
        main_actor,
    )
}
