use super::*;

pub(super) static FA: LocaleContent = LocaleContent {
    dir: TextDirection::Rtl,
    nav: NavCopy {
        home: "صفحه اصلی",
        services: "راهکارها",
        projects: "پروژه‌ها",
        about: "درباره ما",
        cta: "درخواست دمو",
        tagline: "پیشرو در راهکارهای هوش مصنوعی سازمانی",
    },
    hero: HeroCopy {
        label: "نسل جدید هوشمندی تجاری",
        title1: "تحول دیجیتال سازمان با",
        title2: "قدرت هوش مصنوعی",
        desc: "راستینکس با بهره‌گیری از پیشرفته‌ترین الگوریتم‌های یادگیری عمیق و کلان‌داده، سازمان شما را به یک اکوسیستم هوشمند، چابک و پیشرو در عصر دیجیتال تبدیل می‌کند.",
        cta: "دریافت مشاوره راهبردی",
        stats: &[
            "+۵۰ پروژه موفق ملی",
            "کاهش ۴۰ درصدی هزینه‌ها",
            "دقت ۹۹ درصدی مدل‌ها",
        ],
    },
    partners: PartnersCopy {
        title: "مورد اعتماد پیشروترین شرکت‌ها و سازمان‌ها",
    },
    features: ItemSection {
        title: "چرا راستینکس؟",
        sub: "تمایز ما در فناوری و تعهد به نتیجه",
        items: &[
            Item {
                title: "امنیت در سطح بانکی",
                desc: "حفاظت از داده‌های حساس سازمانی با پروتکل‌های رمزنگاری پیشرفته و استقرار در سرورهای داخلی.",
            },
            Item {
                title: "مدل‌های هوش مصنوعی اختصاصی",
                desc: "توسعه و آموزش مدل‌های زبانی (LLM) دقیقاً منطبق بر نیازها و ادبیات سازمان شما.",
            },
            Item {
                title: "مقیاس‌پذیری بالا",
                desc: "زیرساخت ابری قدرتمند که همگام با رشد کسب‌وکار شما توسعه می‌یابد.",
            },
            Item {
                title: "پشتیبانی فنی ۲۴/۷",
                desc: "تیم متخصصین هوش مصنوعی ما در تمام مراحل پیاده‌سازی و نگهداری همراه شماست.",
            },
        ],
    },
    process: ItemSection {
        title: "مسیر هوشمندسازی",
        sub: "سه گام ساده تا تحول دیجیتال سازمان شما",
        items: &[
            Item {
                title: "مشاوره و نیازسنجی",
                desc: "تحلیل دقیق فرآیندهای فعلی و شناسایی فرصت‌های هوشمندسازی.",
            },
            Item {
                title: "توسعه و آموزش مدل",
                desc: "طراحی راهکار اختصاصی و آموزش مدل‌ها با داده‌های شما.",
            },
            Item {
                title: "استقرار و یکپارچه‌سازی",
                desc: "پیاده‌سازی نهایی و اتصال به سیستم‌های موجود سازمان.",
            },
        ],
    },
    services: ItemSection {
        title: "محصولات و راهکارهای هوشمند",
        sub: "ابزارهایی قدرتمند برای اتوماسیون و رشد کسب‌وکار شما",
        items: &[
            Item {
                title: "ادمین هوشمند شبکه‌های اجتماعی",
                desc: "مدیریت خودکار دایرکت، نظرات و ثبت سفارش در اینستاگرام، تلگرام و واتساپ به‌صورت ۲۴ ساعته.",
            },
            Item {
                title: "جریان‌کار تلفنی هوشمند (AI Telephony)",
                desc: "پاسخگویی صوتی هوشمند به تماس‌ها، نوبت‌دهی خودکار و پیگیری مشتریان با صدای طبیعی انسانی.",
            },
            Item {
                title: "اتوماسیون رباتیک (Enterprise RPA)",
                desc: "حذف کارهای تکراری اداری و مالی با ربات‌های نرم‌افزاری دقیق و کاهش خطای انسانی به صفر.",
            },
            Item {
                title: "دستیارهای تعاملی سازمانی",
                desc: "چت‌بات‌های اختصاصی آموزش‌دیده بر روی داده‌های سازمان شما برای پشتیبانی فنی و داخلی.",
            },
            Item {
                title: "بینایی ماشین و نظارت هوشمند",
                desc: "کنترل کیفیت خط تولید و احراز هویت بیومتریک با استفاده از پردازش تصویر پیشرفته.",
            },
            Item {
                title: "هوش تجاری (BI) و تحلیل داده",
                desc: "داشبوردهای مدیریتی هوشمند برای رصد لحظه‌ای KPIها و پیش‌بینی روند بازار.",
            },
        ],
    },
    projects: ProjectsCopy {
        title: "پروژه‌های شاخص",
        sub: "نمونه‌هایی از ارزش‌آفرینی در صنایع مختلف",
        items: &[
            ProjectItem {
                title: "سامانه هوشمند بانکی",
                cat: "FinTech",
                desc: "پیاده‌سازی سیستم کشف تقلب آنی با دقت ۹۹.۸٪ برای یکی از بانک‌های خصوصی کشور.",
            },
            ProjectItem {
                title: "بینایی ماشین در خرده‌فروشی",
                cat: "Retail",
                desc: "تحلیل رفتار مشتریان در فروشگاه‌های زنجیره‌ای و بهینه‌سازی چیدمان قفسه‌ها.",
            },
            ProjectItem {
                title: "تحلیل اسناد پزشکی",
                cat: "HealthTech",
                desc: "استخراج خودکار اطلاعات از پرونده‌های پزشکی و دسته‌بندی هوشمند بیماران.",
            },
        ],
    },
    about: AboutCopy {
        title: "درباره راستینکس",
        sub: "تعهد ما: نوآوری، امنیت و نتیجه‌گرایی",
        desc: "ما در راستینکس کد نمی‌نویسیم، ما آینده را مهندسی می‌کنیم. ماموریت ما توانمندسازی سازمان‌های ایرانی با لبه تکنولوژی جهانی است تا در اقتصاد دیجیتال پیشرو باشند.",
        values: &[
            "طراحی راهکارهای مقیاس‌پذیر",
            "امنیت داده در سطح سازمانی",
            "پشتیبانی و نگهداری اختصاصی",
        ],
    },
    roadmap: RoadmapCopy {
        title: "دستیار تدوین استراتژی هوشمند",
        desc: "با وارد کردن حوزه فعالیت خود، هوش مصنوعی سه راهکار کلیدی و اثرگذار را برای هوشمندسازی کسب‌وکار شما پیشنهاد می‌دهد.",
        placeholder: "مثال: صنعت پتروشیمی، بانکداری، خرده‌فروشی...",
        btn: "تحلیل استراتژیک",
        result: "پیشنهادهای راهبردی هوش مصنوعی:",
        waiting: "منتظر ورودی شما...",
        error: "در هنگام تدوین نقشه راه خطایی رخ داد.",
        empty: "پاسخی دریافت نشد.",
        answer_language: "Persian",
    },
    demo_modal: DemoModalCopy {
        title: "درخواست دمو و مشاوره",
        desc: "لطفاً فرم زیر را تکمیل کنید. کارشناسان ما در کوتاه‌ترین زمان با شما تماس خواهند گرفت.",
        fields: LeadFieldLabels {
            name: "نام و نام خانوادگی",
            email: "آدرس ایمیل",
            company: "نام شرکت / سازمان",
            province: "استان محل فعالیت",
            mobile: "شماره موبایل",
        },
        submit: "ارسال درخواست",
        cancel: "انصراف",
    },
    footer: FooterCopy {
        desc: "راستینکس؛ پیشرو در توسعه زیرساخت‌های هوش مصنوعی سازمانی و شریک قابل اعتماد برندهای برتر در مسیر تعالی دیجیتال.",
        contact: "پل‌های ارتباطی",
        links: "دسترسی سریع",
        copy: "© ۱۴۰۴ کلیه حقوق مادی و معنوی متعلق به rastinax.com است.",
        addr_tehran_label: "دفتر مرکزی - تهران:",
        addr_tehran: "جردن، خیابان گلفام، پلاک ۵۰، طبقه ۱",
        addr_karaj_label: "مرکز نوآوری و توسعه - کرج:",
        addr_karaj: "میدان والفجر، بلوار سرداران، ساختمان مروارید، طبقه ۲",
        phone_karaj_label: "تلفن ثابت کرج",
        consult_label: "مشاوره تخصصی",
        whatsapp_label: "ارتباط در واتساپ",
        privacy: "حریم خصوصی",
        terms: "شرایط استفاده",
    },
    chat: ChatCopy {
        welcome: "با سلام. من دستیار هوشمند راستینکس هستم. در مورد محصولات جدید (ادمین اینستاگرام، تلفن هوشمند) سوالی دارید؟",
        placeholder: "پرسش خود را مطرح نمایید...",
        thinking: "در حال پردازش...",
        title: "مشاور هوشمند",
        online: "آنلاین | Gemini Pro",
        role_prompt: "You are a senior enterprise AI consultant for Rastinax. Rastinax offers Smart Social Media Admins (Insta/Telegram/WhatsApp), AI Telephony, and RPA. Answer in formal Persian.",
        service_summary: "Services: AI Chatbots, Automation (RPA), Data Analysis. Contact: 021-91322922.",
        error: "متأسفانه در ارتباط با سرویس خطایی رخ داد. لطفاً دوباره تلاش کنید.",
        empty_reply: "پاسخی دریافت نشد.",
        open_label: "باز کردن گفتگو",
        close_label: "بستن گفتگو",
    },
};
