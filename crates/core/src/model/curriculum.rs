//! Built-in three-year occupational therapy curriculum.

use crate::model::module::{Difficulty, Module, ModuleDraft};

#[allow(clippy::too_many_arguments)]
fn draft(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    practical_goal: &str,
    topics: &[&str],
    year: u8,
    difficulty: Difficulty,
    estimated_hours: f32,
) -> ModuleDraft {
    ModuleDraft {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        practical_goal: practical_goal.to_owned(),
        topics: topics.iter().map(|t| (*t).to_owned()).collect(),
        year,
        difficulty,
        estimated_hours,
    }
}

#[allow(clippy::too_many_lines)]
pub(crate) fn ot_pathway_modules() -> Vec<Module> {
    [
        draft(
            "y1-m1",
            "The OT Toolbox: Foundations & Assessment",
            "A fast-paced dive into the \"What and How\" of OT. Stop reading history; start observing human action.",
            "Skills Lab",
            "Conduct a \"Life Audit\" on yourself: Identify 3 daily habits that are \"Occupational Barriers\".",
            &[
                "The 60-Second Scan",
                "History through the Lens of Doing",
                "Interviewing & Therapeutic Use of Self",
                "Clinical SMARTER Goals",
            ],
            1,
            Difficulty::Medium,
            40.0,
        ),
        draft(
            "y1-m2",
            "Anatomy in Motion: Kinesiology & Handling",
            "Master the musculoskeletal system through touch and movement. This module combines 2 semesters of bio-science.",
            "Hands-On Anatomy",
            "Map the \"Origin and Insertion\" of your own Biceps using a washable marker.",
            &[
                "Bony Landmarks & Palpation",
                "The 0-5 Strength Scale",
                "Goniometry Lab",
                "Safe Patient Transfer Techniques",
            ],
            1,
            Difficulty::High,
            60.0,
        ),
        draft(
            "y1-m3",
            "Lifespan & Activity Analysis Lab",
            "Understanding how humans grow and how to break down any activity into therapeutic steps.",
            "Clinical Analysis",
            "Analyze the task of \"Tying Shoelaces\" and find 4 different ways to grade the activity for a child.",
            &[
                "Pediatric Milestones & Play",
                "Aging & Geriatric Adaptations",
                "PEOP & MOHO Models",
                "Task-Person-Environment Fit",
            ],
            1,
            Difficulty::Medium,
            45.0,
        ),
        draft(
            "y2-m1",
            "Neuro Rehab: Brain, Body & Recovery",
            "Translating complex neurology into actual exercises for stroke and brain injury survivors.",
            "Neurology",
            "Spend 20 minutes performing tasks with your non-dominant hand to feel neuro-fatigue.",
            &[
                "Neuroplasticity in Action",
                "Mirror Therapy & C.I.M.T.",
                "Post-Stroke Upper Limb Management",
                "Cognitive Remediation Games",
            ],
            2,
            Difficulty::High,
            70.0,
        ),
        draft(
            "y2-m2",
            "Physical Rehab & Assistive Gadgetry",
            "Adaptive equipment and strategies for physical disabilities. This is 100% practical engineering for living.",
            "Adaptive Tech",
            "Identify 5 items in your kitchen that could be modified for someone with severe Arthritis.",
            &[
                "One-Handed ADL Techniques",
                "Wheelchair Seating & Mobility",
                "Home Mod & Environmental Audits",
                "Orthopedic Recovery Protocols",
            ],
            2,
            Difficulty::High,
            65.0,
        ),
        draft(
            "y2-m3",
            "Mental Health: Group Dynamics & Psych",
            "Psychosocial interventions for community health and mental wellness.",
            "Mental Health",
            "Draft a 3-step \"Grounding Protocol\" you could teach a patient during a panic attack.",
            &[
                "Leading Therapy Groups",
                "CBT & DBT Strategies in OT",
                "Substance Abuse & Harm Reduction",
                "Coping Strategies for Anxiety",
            ],
            2,
            Difficulty::Medium,
            50.0,
        ),
        draft(
            "y3-m1",
            "The Maker Lab: Splinting & Hand Therapy",
            "Advanced tactile skills. Designing and creating supports for the most complex tool: the hand.",
            "Maker Lab",
            "Use a hairdryer and a plastic cup (be careful!) to experiment with how heat changes material shape.",
            &[
                "Thermoplastic Molding",
                "Static vs Dynamic Splints",
                "Edema & Scar Management",
                "Tendon Injury Protocols",
            ],
            3,
            Difficulty::High,
            55.0,
        ),
        draft(
            "y3-m2",
            "The Evidence-Based Innovation Lab",
            "Merging research with clinical practice. Don't just follow the rules—improve them.",
            "Research",
            "Find a YouTube \"health hack\" and find one reason why an OT might disagree with it based on science.",
            &[
                "Critically Appraised Topics (CATs)",
                "The Clinician-Researcher Path",
                "Statistical Hacks for Busy OTs",
                "Designing a Clinical Pilot",
            ],
            3,
            Difficulty::High,
            40.0,
        ),
        draft(
            "y3-m3",
            "The Practice Boss: Ethics & Leadership",
            "Final prep for the real world. Managing teams, clinics, and your own professional ethics.",
            "Leadership",
            "Create a 30-second \"Elevator Pitch\" explaining why every hospital needs an OT.",
            &[
                "The Business of Private Practice",
                "Ethical Dilemmas in Crisis",
                "Marketing Your Clinical Niche",
                "Leadership & Staff Supervision",
            ],
            3,
            Difficulty::Medium,
            35.0,
        ),
    ]
    .into_iter()
    .map(Module::from_trusted)
    .collect()
}
