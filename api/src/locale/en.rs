use super::*;

pub(super) static EN: LocaleContent = LocaleContent {
    dir: TextDirection::Ltr,
    nav: NavCopy {
        home: "Home",
        services: "Solutions",
        projects: "Case Studies",
        about: "Company",
        cta: "Request Demo",
        tagline: "Leading Enterprise AI Solutions",
    },
    hero: HeroCopy {
        label: "Pioneering Next-Gen Business Intelligence",
        title1: "Digital Transformation via",
        title2: "Advanced AI Power",
        desc: "Rastinax leverages state-of-the-art Deep Learning and Big Data strategies to transform your organization into an agile, intelligent, and market-leading ecosystem.",
        cta: "Get Strategic Consultation",
        stats: &[
            "+50 Successful Projects",
            "40% Cost Reduction",
            "99% Model Accuracy",
        ],
    },
    partners: PartnersCopy {
        title: "Trusted by Leading Enterprises",
    },
    features: ItemSection {
        title: "Why Rastinax?",
        sub: "Our distinction in technology and commitment to results",
        items: &[
            Item {
                title: "Bank-Grade Security",
                desc: "Protecting sensitive enterprise data with advanced encryption and on-premise deployment options.",
            },
            Item {
                title: "Custom AI Models",
                desc: "Developing and fine-tuning Large Language Models (LLMs) specifically for your organization needs.",
            },
            Item {
                title: "High Scalability",
                desc: "Robust cloud infrastructure that scales seamlessly with your business growth.",
            },
            Item {
                title: "24/7 Technical Support",
                desc: "Our team of AI experts accompanies you through every step of implementation and maintenance.",
            },
        ],
    },
    process: ItemSection {
        title: "Transformation Journey",
        sub: "Three simple steps to your digital evolution",
        items: &[
            Item {
                title: "Consultation & Discovery",
                desc: "Deep analysis of current workflows to identify high-impact automation opportunities.",
            },
            Item {
                title: "Model Development",
                desc: "Designing custom solutions and training models with your proprietary data.",
            },
            Item {
                title: "Deployment & Integration",
                desc: "Final implementation and seamless integration with existing enterprise systems.",
            },
        ],
    },
    services: ItemSection {
        title: "Smart Products & Solutions",
        sub: "Powerful tools for automation and business growth",
        items: &[
            Item {
                title: "Smart Social Media Admin",
                desc: "Automated handling of DMs, comments, and orders on Instagram, Telegram, and WhatsApp 24/7.",
            },
            Item {
                title: "AI Telephony Workflows",
                desc: "Intelligent voice response, automated appointment scheduling, and customer follow-ups with natural human voice.",
            },
            Item {
                title: "Enterprise RPA",
                desc: "Eliminate repetitive administrative tasks with precise software robots, reducing human error to zero.",
            },
            Item {
                title: "Enterprise Conversational AI",
                desc: "Custom chatbots trained on your organization data for internal and technical support.",
            },
            Item {
                title: "Computer Vision",
                desc: "Quality control and biometric authentication using advanced image processing.",
            },
            Item {
                title: "Business Intelligence (BI)",
                desc: "Smart dashboards for real-time KPI monitoring and market trend prediction.",
            },
        ],
    },
    projects: ProjectsCopy {
        title: "Featured Projects",
        sub: "Case studies of value creation across industries",
        items: &[
            ProjectItem {
                title: "Smart Banking System",
                cat: "FinTech",
                desc: "Implemented real-time fraud detection with 99.8% accuracy for a major private bank.",
            },
            ProjectItem {
                title: "Retail Computer Vision",
                cat: "Retail",
                desc: "Customer behavior analysis in chain stores for layout optimization.",
            },
            ProjectItem {
                title: "Medical Doc Analysis",
                cat: "HealthTech",
                desc: "Automated information extraction from medical records and smart patient categorization.",
            },
        ],
    },
    about: AboutCopy {
        title: "About Rastinax",
        sub: "Our Commitment: Innovation, Security, and Results",
        desc: "At Rastinax, we do not just write code; we engineer the future. Our mission is to empower organizations with global-tier technology to lead in the digital economy.",
        values: &[
            "Scalable Solution Design",
            "Enterprise-Grade Data Security",
            "Dedicated Support & Maintenance",
        ],
    },
    roadmap: RoadmapCopy {
        title: "AI Strategic Strategy Assistant",
        desc: "Enter your industry sector to receive three key, high-impact AI implementation strategies for your business.",
        placeholder: "E.g., Petrochemical, Banking, Retail...",
        btn: "Strategic Analysis",
        result: "Strategic AI Recommendations:",
        waiting: "Waiting for input...",
        error: "An error occurred while generating the roadmap.",
        empty: "No response generated.",
        answer_language: "English",
    },
    demo_modal: DemoModalCopy {
        title: "Request Demo & Consultation",
        desc: "Please fill out the form below. Our experts will contact you shortly.",
        fields: LeadFieldLabels {
            name: "Full Name",
            email: "Email Address",
            company: "Company / Organization",
            province: "Province / State",
            mobile: "Mobile Number",
        },
        submit: "Submit Request",
        cancel: "Cancel",
    },
    footer: FooterCopy {
        desc: "Rastinax; A leader in developing enterprise AI infrastructure and a trusted partner for top brands in digital excellence.",
        contact: "Contact Information",
        links: "Quick Links",
        copy: "© 2025 All rights reserved by rastinax.com.",
        addr_tehran_label: "HQ - Tehran:",
        addr_tehran: "Floor 1, No 50, Golfam St, Jordan",
        addr_karaj_label: "Innovation Center - Karaj:",
        addr_karaj: "Floor 2, Morvarid Bldg, Sardaran Blvd, Valfajr Sq",
        phone_karaj_label: "Karaj Office",
        consult_label: "Expert Consultation",
        whatsapp_label: "WhatsApp Support",
        privacy: "Privacy Policy",
        terms: "Terms of Service",
    },
    chat: ChatCopy {
        welcome: "Greetings. I am the Rastinax intelligent assistant. Ask me about our Smart Social Media Admins or AI Telephony solutions.",
        placeholder: "Type your inquiry...",
        thinking: "Processing...",
        title: "AI Consultant",
        online: "Online | Gemini Pro",
        role_prompt: "You are a senior enterprise AI consultant for Rastinax. Rastinax offers Smart Social Media Admins (Insta/Telegram/WhatsApp), AI Telephony, and RPA. Answer in formal English.",
        service_summary: "Services: AI Chatbots, Automation (RPA), Data Analysis. Contact: 021-91322922.",
        error: "Sorry, I encountered an error connecting to the service.",
        empty_reply: "Error.",
        open_label: "Open Chat",
        close_label: "Close Chat",
    },
};
