//! The game's puzzles.
//!
//! Each function builds a fresh, unsolved puzzle with its full content.

use oe_core::{PuzzleId, ViewUpdate, catalog};

use crate::condition::Condition;
use crate::dialogue::{DialogueNode, DialogueOption, DialoguePuzzle};
use crate::interview::{DocumentQuiz, InterviewQuestion};
use crate::puzzle::Puzzle;
use crate::quiz::{Question, QuizPuzzle};
use crate::timing::TimingChallenge;

/// Number handed out by the ticket machine.
pub const TICKET_NUMBER: u32 = 12;

/// Successful throws needed at the metal detector.
pub const SECURITY_THROWS: u32 = 3;

/// Correct interview answers needed to pass.
pub const INTERVIEW_PASS_MARK: usize = 7;

/// Documents the interviewer checks at the end.
pub const REQUIRED_DOCUMENTS: [&str; 5] = [
    catalog::PASSPORT,
    catalog::VISA_APPLICATION,
    catalog::STOLEN_DOCUMENT,
    catalog::BIRTH_CERTIFICATE,
    catalog::EMPLOYMENT_LETTER,
];

/// Build the puzzle with the given id.
pub fn for_id(id: PuzzleId) -> Puzzle {
    match id {
        PuzzleId::Ticket => ticket_quiz(),
        PuzzleId::QueueGuard => queue_guard(),
        PuzzleId::Security => security_check(),
        PuzzleId::Interview => interview(),
    }
}

/// The ticket machine.
///
/// Five questions, all of which must be answered correctly. The reward is
/// the ticket the queue asks for.
pub fn ticket_quiz() -> Puzzle {
    let quiz = QuizPuzzle::new(PuzzleId::Ticket, "Get Your Ticket Number")
        .with_question(Question::new(
            "What does 2 + 2 equal?",
            ["3.99999", "4.000001", "root 16", "just wing it"],
            2,
            "Correct! Because root 16 is a perfect 4.",
        ))
        .with_question(Question::new(
            "How would you fix your laptop, as a professional engineer?",
            [
                "Check the CPU",
                "You can't fix it because you skipped all the lectures",
                "Turn it off and on",
                "Beg for another laptop.",
            ],
            2,
            "Correct! Turning it off and on always works.",
        ))
        .with_question(Question::new(
            "Who was responsible for the bugs in this project?",
            ["you", "Most definitely you", "All you buddy", "The language"],
            3,
            "Correct! Blame the language as always!",
        ))
        .with_question(Question::new(
            "Your teammate comes to you with a bug. What do you say?",
            [
                "Sure, let me take a look",
                "Uhh, it works on my machine",
                "You should go to someone smarter than me for this",
                "...",
            ],
            1,
            "Correct! Apparently your machine is special.",
        ))
        .with_question(Question::new(
            "What is the most important tool for programmers?",
            ["Keyboard", "caffeine", "a laptop"],
            1,
            "Correct! Welcome to Irish bureaucracy. You've passed the quiz!",
        ))
        .with_reward(
            catalog::item_from_name(catalog::TICKET),
            format!("You got ticket number {TICKET_NUMBER}!"),
        )
        .with_repeat_message("You already have a ticket.");
    Puzzle::Quiz(quiz)
}

/// The guard at the head of the queue.
///
/// A sixteen-node conversation. Offering the popsicle is only possible
/// while carrying one, and handing it over solves the puzzle.
pub fn queue_guard() -> Puzzle {
    let has_popsicle = || Condition::has_item(catalog::POPSICLE);

    let main_menu = vec![
        DialogueOption::new("What's this line for?", 1),
        DialogueOption::new("Can I skip the line?", 2),
        DialogueOption::new("Why do you look so sweaty?", 3),
        DialogueOption::new("Never mind...", 4),
    ];
    let skip_menu = vec![
        DialogueOption::new("Please?", 6),
        DialogueOption::new("What do you want?", 7),
        DialogueOption::new("I have something for you...", 10).with_condition(has_popsicle()),
        DialogueOption::new("Okay, fine.", 4),
    ];
    let bribe_menu = vec![
        DialogueOption::new("Yes. It's yours.", 12).succeeds(),
        DialogueOption::new("No, it's mine.", 13),
        DialogueOption::new("Maybe I'm willing to trade...", 14),
    ];

    let nodes = vec![
        // 0
        DialogueNode::new(
            "Hold it. This queue is for the officially patient only.\n\n\
             You don't look patient... you look agenda-ful. What do you want?",
            main_menu.clone(),
        ),
        // 1
        DialogueNode::new(
            "This is the line for the line that leads to the real line.\n\n\
             Very exclusive. Invitation only.",
            vec![
                DialogueOption::new("That makes no sense.", 5),
                DialogueOption::new("Can I get an invitation?", 2),
                DialogueOption::new("Okay...", 4),
            ],
        ),
        // 2
        DialogueNode::new(
            "I could get fired for letting you skip the line.\n\n\
             Or worse... I'd get promoted and have to work harder.",
            skip_menu.clone(),
        ),
        // 3
        DialogueNode::new(
            "This uniform is 90% polyester and 10% despair.\n\nIt traps heat AND emotions.",
            vec![
                DialogueOption::new("Do you need help?", 8),
                DialogueOption::new("That sounds like a skill issue.", 4),
                DialogueOption::new("Never mind...", 4),
            ],
        ),
        // 4
        DialogueNode::terminal(""),
        // 5
        DialogueNode::new(
            "Sir/Madam/Engineering Student...\n\n\
             Nothing in this office makes sense. That's the point.",
            main_menu.clone(),
        ),
        // 6
        DialogueNode::new(
            "Aww.\n\nYou begged so politely.\n\nStill no.",
            skip_menu.clone(),
        ),
        // 7
        DialogueNode::new(
            "Well... I could maybe turn around for exactly three seconds.\n\n\
             But only if I receive...\n\nsomething cold...\n\nsomething fruity...\n\n\
             something that melts under pressure...\n\nlike...\n\na popsicle.\n\n\
             Not that I'm being specific.",
            vec![
                DialogueOption::new("Are you asking for a popsicle?", 9),
                DialogueOption::new("I don't have that.", 11),
                DialogueOption::new("I have one!", 10).with_condition(has_popsicle()),
            ],
        ),
        // 8
        DialogueNode::new(
            "Yes.\n\nGive me a popsicle and I'll forget you asked.",
            main_menu,
        ),
        // 9
        DialogueNode::new(
            "No.\n\nI'm legally not allowed to ask for a bribe.\n\n\
             But if a popsicle fell into my pocket...\n\nI would not complain.",
            skip_menu,
        ),
        // 10
        DialogueNode::new(
            "No... way...\n\nIs that a... Blue Raspberry Ultra Freeze popsicle?",
            bribe_menu.clone(),
        ),
        // 11
        DialogueNode::new(
            "Wait. You don't have one?\n\nThen why are you even TALKING to me?!\n\n\
             You're wasting government time!",
            vec![
                DialogueOption::new("Where do I get one?", 15),
                DialogueOption::new("Okay, sorry.", 4),
            ],
        ),
        // 12
        DialogueNode::terminal(
            "Oh sweet frozen justice...\n\nTake the shortcut.\n\nGo.\n\n\
             Before I change my mind... or finish this popsicle.",
        ),
        // 13
        DialogueNode::terminal(
            "...Why would you SAY that to me?\n\nGo stand at the back.\n\nThink about your choices.",
        ),
        // 14
        DialogueNode::new(
            "Buddy.\n\nI have nothing.\n\nI earn 5 euro an hour.\n\nJust give me the popsicle.",
            bribe_menu,
        ),
        // 15
        DialogueNode::terminal(
            "There's a vending machine in the break room.\n\n\
             It only takes coins and tears.\n\nMostly tears.",
        ),
    ];

    let guard = DialoguePuzzle::new(PuzzleId::QueueGuard, "Talk your way through the guard", nodes)
        .with_success_line("The guard accepts your bribe!")
        .with_success_update(ViewUpdate::EnableHotspot("nextRoom".to_string()))
        .with_repeat_message("The guard already let you through.");
    Puzzle::Dialogue(guard)
}

/// The metal detector.
pub fn security_check() -> Puzzle {
    Puzzle::Timing(TimingChallenge::new(
        PuzzleId::Security,
        "Throw Items Past the Guard",
        SECURITY_THROWS,
    ))
}

/// The immigration interview.
///
/// Twelve questions, five of which want a document shown with the answer.
/// Every option 0 is the right answer; the documents are the hard part.
pub fn interview() -> Puzzle {
    let questions = [
        InterviewQuestion::new(
            "First question: Do you have your passport?",
            ["Yes, I have it", "No, I forgot it", "What's a passport?", "I have a driver's license"],
            0,
            "Good, you have your passport.",
        )
        .with_document(catalog::PASSPORT),
        InterviewQuestion::new(
            "Do you have your completed visa application form?",
            ["Yes, right here", "I filled it out in pencil", "What form?", "I have a napkin with notes"],
            0,
            "Excellent, the form is required.",
        )
        .with_document(catalog::VISA_APPLICATION),
        InterviewQuestion::new(
            "Can you show me your birth certificate?",
            ["Yes, here it is", "I was born yesterday", "My mom has it", "I have a certificate of existence"],
            0,
            "Good, birth certificate verified.",
        )
        .with_document(catalog::BIRTH_CERTIFICATE),
        InterviewQuestion::new(
            "What is bureaucracy?",
            ["A form of government", "A type of pasta", "The art of waiting", "I don't know"],
            0,
            "Interesting perspective.",
        ),
        InterviewQuestion::new(
            "Can you provide proof of employment?",
            [
                "Yes, here's my employment letter",
                "I'm self-employed",
                "I work for exposure",
                "I have a LinkedIn profile",
            ],
            0,
            "Employment verified.",
        )
        .with_document(catalog::EMPLOYMENT_LETTER),
        InterviewQuestion::new(
            "How many forms have you filled out today?",
            ["Too many", "Not enough", "Exactly 42", "I lost count"],
            0,
            "That sounds about right.",
        ),
        InterviewQuestion::new(
            "Why Ireland specifically?",
            ["The people are friendly", "I like the weather", "I heard the bureaucracy is fun", "I got lost"],
            0,
            "Fair enough.",
        ),
        InterviewQuestion::new(
            "Do you have your identification document?",
            ["Yes, I have it", "I have a selfie", "My face is my ID", "I have a drawing of myself"],
            0,
            "Identity verified.",
        )
        .with_document(catalog::STOLEN_DOCUMENT),
        InterviewQuestion::new(
            "Why do you want to immigrate to Ireland?",
            ["For better opportunities", "The weather", "To escape this interview", "I got lost"],
            0,
            "That's a reasonable answer.",
        ),
        InterviewQuestion::new(
            "On a scale of 1-10, how patient are you?",
            ["10 - Very patient", "5 - Moderately patient", "1 - Not patient at all", "What is patience?"],
            0,
            "Good answer.",
        ),
        InterviewQuestion::new(
            "What is the capital of Ireland?",
            ["Dublin", "Cork", "Galway", "Belfast"],
            0,
            "Correct!",
        ),
        InterviewQuestion::new(
            "Final question: Do you have ALL required documents with you right now?",
            ["Yes, I have everything", "I think so", "Maybe", "I hope so"],
            0,
            "Let me verify...",
        ),
    ];

    let quiz = questions.into_iter().fold(
        DocumentQuiz::new(PuzzleId::Interview, "Immigration Interview", INTERVIEW_PASS_MARK)
            .with_approval_line("Welcome to Ireland. Your application is approved."),
        DocumentQuiz::with_question,
    );
    let quiz = REQUIRED_DOCUMENTS
        .into_iter()
        .fold(quiz, |quiz, doc| quiz.with_required_document(doc));
    Puzzle::Interview(quiz)
}
