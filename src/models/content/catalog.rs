use super::{AboutBlurb, FaqEntry, FeatureCard, PrizeTier, ProblemStatement, TimelineEntry};

pub static ABOUT_BLURBS: [AboutBlurb; 2] = [
    AboutBlurb {
        icon: "👥",
        heading: "About WEAL Club",
        body: "WEAL (We Engineer and Lead) is a student-led technical club at PES University \
               dedicated to fostering innovation and technical excellence among students. The \
               club provides a platform for students to collaborate, learn, and apply their \
               skills to solve real-world problems. Through various events, workshops, and \
               hackathons, WEAL aims to nurture the next generation of tech leaders and \
               innovators.",
    },
    AboutBlurb {
        icon: "♥",
        heading: "About HEAL-O-CODE",
        body: "HEAL-O-CODE 2.0 is a premier health-tech hackathon organized by the WEAL Club of \
               PES University. This event brings together passionate developers, designers, and \
               healthcare enthusiasts to create technological solutions addressing critical \
               healthcare challenges. Participants work in teams to develop prototypes focused \
               on accessibility, efficiency, and patient care. Join us for a 36-hour journey of \
               coding, collaboration, and innovation at the intersection of technology and \
               wellness.",
    },
];

pub static WHY_PARTICIPATE: [FeatureCard; 3] = [
    FeatureCard {
        icon: "</>",
        heading: "Learn & Grow",
        body: "Enhance your skills and collaborate with like-minded individuals",
    },
    FeatureCard {
        icon: "🏆",
        heading: "Win Prizes",
        body: "Compete for an impressive prize pool and recognition",
    },
    FeatureCard {
        icon: "♥",
        heading: "Make Impact",
        body: "Create solutions that can transform healthcare and wellness",
    },
];

pub static TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        when: "24th March 2025, 11:59 PM",
        title: "Registrations close",
        detail: "Submit your team details through the registration form.",
    },
    TimelineEntry {
        when: "28th March 2025, 12:00 AM",
        title: "Hacking begins",
        detail: "Problem statements are locked in and the 36-hour build starts.",
    },
    TimelineEntry {
        when: "28th March 2025, 6:00 PM",
        title: "Mentor checkpoint",
        detail: "Mentors review progress and help teams unblock.",
    },
    TimelineEntry {
        when: "29th March 2025, 12:00 PM",
        title: "Submissions close",
        detail: "Final demos and judging follow the submission deadline.",
    },
];

pub static PRIZE_TIERS: [PrizeTier; 4] = [
    PrizeTier {
        icon: "🥇",
        title: "Winner",
        detail: "Top team overall across all tracks.",
    },
    PrizeTier {
        icon: "🥈",
        title: "First Runner-up",
        detail: "Second place overall.",
    },
    PrizeTier {
        icon: "🥉",
        title: "Second Runner-up",
        detail: "Third place overall.",
    },
    PrizeTier {
        icon: "💡",
        title: "Best Open Innovation",
        detail: "Most promising self-proposed healthcare problem and solution.",
    },
];

pub static FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "Who can participate?",
        answer: "Students with an interest in building technology for healthcare and wellness.",
    },
    FaqEntry {
        question: "How long is the hackathon?",
        answer: "36 hours of continuous building, ending at noon on 29th March 2025.",
    },
    FaqEntry {
        question: "Can we bring our own problem statement?",
        answer: "Yes. The Open Innovation track accepts self-proposed healthcare challenges.",
    },
    FaqEntry {
        question: "How do we register?",
        answer: "Use the Register Now button on the home section to open the registration form.",
    },
];

pub static PROBLEM_STATEMENTS: [ProblemStatement; 10] = [
    ProblemStatement {
        icon: "🧠",
        title: "Alzheimer's Memory Activities App",
        domain: "Mobile App Development",
        summary: "This mobile app supports adults with Alzheimer's by offering \
                  memory-stimulating games, personalized reminders, and emotional support. It \
                  includes mood tracking, virtual companionship, and AI-powered insights to \
                  monitor cognitive health. Caregivers can stay connected through shared \
                  calendars and reports.",
        requirements: &[
            "Intuitive UI designed for elderly users",
            "Progressive memory exercises with difficulty adaptation",
            "Caregiver dashboard with progress monitoring",
            "Reminder system with voice and visual cues",
        ],
        highlighted: false,
    },
    ProblemStatement {
        icon: "✋",
        title: "IoT Sign Language Translator",
        domain: "IoT & AI",
        summary: "An IoT-powered sign language translation device enables communication for \
                  mute individuals using smart finger sensors and a wristband equipped with \
                  motion sensors. It recognizes gestures using AI models, converting them into \
                  text or speech in real time.",
        requirements: &[
            "Wearable sensors with low latency processing",
            "Machine learning for gesture recognition",
            "Text-to-speech conversion in multiple languages",
            "Mobile app integration for settings and updates",
        ],
        highlighted: false,
    },
    ProblemStatement {
        icon: "👁",
        title: "Glaucoma & ROP Screening System",
        domain: "Computer Vision & Deep Learning",
        summary: "A system for early detection and screening of Glaucoma using Fundus photos and \
                  RNFL (OCT), combined with automated time tracking of ROP screening. It \
                  provides automated reviews and notifies doctors when cases go unreviewed.",
        requirements: &[
            "AI model for analyzing retinal images",
            "Automated screening workflow management",
            "Alert system for missed or delayed reviews",
            "Integration with ophthalmology equipment",
        ],
        highlighted: false,
    },
    ProblemStatement {
        icon: "💬",
        title: "Dyslexic Communication AI Assistant",
        domain: "Mobile App & Generative AI",
        summary: "A mobile app with an AI-powered chatbot that helps dyslexic learners improve \
                  their communication skills through interactive, personalized learning with \
                  real-time speech recognition, text-to-speech feedback, and phonetic \
                  correction.",
        requirements: &[
            "Dyslexia-friendly UI with customizable text display",
            "AI chatbot with natural language understanding",
            "Adaptive learning pathways",
            "Speech recognition with pronunciation guidance",
        ],
        highlighted: false,
    },
    ProblemStatement {
        icon: "📄",
        title: "Medical Documentation & Summarization System",
        domain: "NLP, Computer Vision, Blockchain & Generative AI",
        summary: "A documentation system that summarizes complex medical records with NLP, \
                  interprets handwritten prescriptions with OCR, and streamlines post-surgery \
                  documentation. Records are stored on blockchain so doctors and patients can \
                  access simplified summaries.",
        requirements: &[
            "Computer vision for handwritten prescription recognition",
            "Patient-friendly summary generation with medical terminology explanation",
            "Secure blockchain storage with proper access controls",
            "Integration with existing Electronic Health Record systems",
        ],
        highlighted: false,
    },
    ProblemStatement {
        icon: "🔬",
        title: "AI Esophageal Cancer Prediction",
        domain: "Computer Vision & Deep Learning",
        summary: "A system that predicts esophageal cancer by analyzing endoscopy images, \
                  helping medical professionals identify potential malignancies at early \
                  stages during routine examinations.",
        requirements: &[
            "Deep learning model for cancer detection in images",
            "Real-time analysis during endoscopic procedures",
            "Visual highlight of suspicious areas",
            "Integration with hospital imaging systems",
        ],
        highlighted: false,
    },
    ProblemStatement {
        icon: "🤰",
        title: "Maternal Care Connect",
        domain: "Mobile App Development",
        summary: "A mobile application connecting pregnant women in rural areas with prenatal \
                  care information and healthcare providers. It tracks pregnancy progress, \
                  facilitates timely hospital referrals, and includes an emergency SOS button.",
        requirements: &[
            "Offline-capable educational resources for prenatal care",
            "GPS-enabled SOS function with nearest hospital locator",
            "Pregnancy tracking with customized alerts and reminders",
            "Low-bandwidth telemedicine capabilities for remote consultations",
            "Local language support for improved accessibility",
        ],
        highlighted: false,
    },
    ProblemStatement {
        icon: "🌐",
        title: "Remote Healthcare Access Platform",
        domain: "Web/Mobile App Development",
        summary: "A platform that helps people in remote areas receive basic medical guidance, \
                  assess symptom severity, and connect with healthcare providers over \
                  low-bandwidth connections.",
        requirements: &[
            "Low-bandwidth functionality for poor connectivity areas",
            "Offline mode with essential healthcare information",
            "Telemedicine capabilities with minimal data usage",
            "Symptom checker with severity assessment",
        ],
        highlighted: false,
    },
    ProblemStatement {
        icon: "🗄",
        title: "Blockchain-Powered Healthcare Insights",
        domain: "Blockchain & Generative AI",
        summary: "AI tools that extract actionable insights from Electronic Health Records \
                  stored on blockchain: patient history analysis, adverse drug reaction \
                  prediction, treatment recommendations, and post-surgical risk prediction.",
        requirements: &[
            "Secure blockchain storage of medical records",
            "AI-powered predictive analytics",
            "Treatment recommendation engine",
            "Patient-specific risk assessment",
        ],
        highlighted: false,
    },
    ProblemStatement {
        icon: "➕",
        title: "Open Innovation",
        domain: "Any Healthcare Technology",
        summary: "Have an innovative healthcare solution that doesn't fit the categories above? \
                  Propose your own problem statement and solution. Identify a significant \
                  healthcare challenge and develop a technological solution that addresses it \
                  in a novel way.",
        requirements: &[
            "Clear identification of a specific healthcare problem",
            "Detailed explanation of how your solution addresses the problem",
            "Technical feasibility assessment with implementation plan",
            "Evidence of potential impact and scalability",
            "Innovative approach that differentiates from existing solutions",
        ],
        highlighted: true,
    },
];
