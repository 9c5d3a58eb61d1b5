#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub designation: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub linkedin: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Author {
    pub name: &'static str,
    pub linkedin: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveProject {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub authors: &'static [Author],
    pub repo: Option<&'static str>,
}

impl ActiveProject {
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|author| author.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PastEvent {
    pub id: u32,
    pub date: &'static str,
    pub title: &'static str,
    pub report_link: &'static str,
    pub resources_link: &'static str,
}

const SARAT: &str = "https://www.linkedin.com/in/gandholi-sarat/";
const CHIRAG: &str = "https://www.linkedin.com/in/panuganti-chirag-sai/";
const PRABIN: &str = "https://www.linkedin.com/in/prabin-kumar-sabat/";
const ABHINAY: &str = "https://www.linkedin.com/in/abhinay-kumar-chauhan/";
const BALAJI: &str = "https://www.linkedin.com/in/satya-balaji-animireddy/";
const SHARAT: &str = "https://www.linkedin.com/in/k-sharat/";
const VISHWANATH: &str = "https://www.linkedin.com/in/vishwanath-shetiya-376a571a5/";
const SAKETH: &str = "https://www.linkedin.com/in/sai-saketh-cherukuri-825456250/";
const LOKESH: &str = "https://www.linkedin.com/in/lokesh-r-4b8a1b1b/";
const ASWIN: &str = "https://www.linkedin.com/in/sai-aswin-5bb211251/";
const PRASHANT: &str = "https://www.linkedin.com/in/prashant-poudyal-a02230325/";
const SAI_KRISHNA: &str = "https://www.linkedin.com/in/saikrishna-kusumanchi-540442379/";
const SUBHASISH: &str = "https://www.linkedin.com/in/subhasish-charan-behera-a43b6b254/";

pub const BLOG_LINKS: &[&str] = &[
    "https://medium.com/@saratgandholi/tracing-code-execution-unlocking-software-insight-without-exposing-code-c2d2f2b84ab6",
    "https://medium.com/@panugantichiragsai12/memory-around-us-why-your-laptop-phone-and-playstation-dont-speak-the-same-927b4cb86850",
    "https://medium.com/@ssaketh.2002/cuda-chronicles-motivation-de3b68368598",
    "https://medium.com/@panugantichiragsai12/memory-around-us-ddr-part-1-019408f92098",
    "https://medium.com/@saratgandholi/unlocking-the-binary-a-dive-into-dynamic-binary-instrumentation-with-dynamorio-8a003b95e836",
    "https://medium.com/@panugantichiragsai12/memory-around-us-ddr-part-2-5d6aa6291d1d",
    "https://medium.com/@saratgandholi/unlocking-the-binary-part-2-practical-dynamorio-instrumentation-in-action-09cfa0968f95",
    "https://medium.com/@saratgandholi/cache-memory-explained-l1-l2-l3-and-why-they-matter-for-performance-49403bb50b1b",
    "https://medium.com/@panugantichiragsai12/memory-around-us-ddr-part-3-1d8166841103",
    "https://medium.com/@saratgandholi/the-easy-way-to-understand-gpu-vs-cpu-364de2d608ad",
    "https://medium.com/@panugantichiragsai12/memory-around-us-lpddr-part-1-e0159687992b",
    "https://medium.com/@saratgandholi/how-a-cpu-really-works-from-fetch-to-execute-6640808e06eb",
    "https://medium.com/@panugantichiragsai12/memory-around-us-lpddr-part-2-8b047ea84499",
    "https://medium.com/@saratgandholi/tracing-code-execution-part-2-from-theory-to-real-world-impact-7e7c3a8bafaa",
    "https://medium.com/@ssaketh.2002/cuda-chronicles-programming-model-2-3025daa389bc",
    "https://medium.com/@saratgandholi/why-your-computer-is-basically-a-lazy-teenager-c7e805830b83",
    "https://medium.com/@panugantichiragsai12/memory-around-us-lpddr-part-3-0f479b00fb17",
    "https://medium.com/@saratgandholi/multithreading-why-your-computer-is-basically-a-group-project-3764e3065c1f",
    "https://medium.com/@ssaketh.2002/cuda-chronicles-programming-interface-3-part-1-021dec1d231c",
    "https://medium.com/@panugantichiragsai12/memory-around-us-gddr-part-1-5e80fa462991",
    "https://medium.com/@panugantichiragsai12/memory-around-us-gddr-part-2-b714e9a7fce1",
    "https://medium.com/@panugantichiragsai12/memory-around-us-gddr-part-3-9f3ca7cfc9fa",
];

pub const GIT_LINKS: &[&str] = &[
    "https://github.com/GandholiSarat/DynamoRIO-Custom-Client",
    "https://github.com/Chirag-Sai-Panuganti/ReLMXEL",
    "https://github.com/GandholiSarat/kv-cache-visualizer",
];

pub const ACTIVE_PROJECTS: &[ActiveProject] = &[
    ActiveProject {
        id: "a1",
        title: "DynamoRIO Open Source Contribution - Community Member",
        description: "Working on fixing issues and contributing documentation improvements to the DynamoRIO project.",
        authors: &[Author { name: "Gandholi Sarat", linkedin: Some(SARAT) }],
        repo: Some("https://github.com/GandholiSarat/dynamorio"),
    },
    ActiveProject {
        id: "a2",
        title: "Performance Analysis of LLMs",
        description: "Exploration of performance characteristics of Large Language Models (LLMs) by experimenting with their computational and memory demands, focusing on how LLMs utilise bandwidth and memory resources across various devices.",
        authors: &[Author { name: "Chirag Sai Panuganti", linkedin: Some(CHIRAG) }],
        repo: None,
    },
    ActiveProject {
        id: "a3",
        title: "Analysis of torch.compile Compilation Stages",
        description: "The project involves analyzing internal stages of torch.compile for PyTorch optimization. Currently studying FX graphs, guards, and various kernel fusion techniques to improve execution efficiency.",
        authors: &[Author { name: "K Sharat", linkedin: Some(SHARAT) }],
        repo: None,
    },
    ActiveProject {
        id: "a4",
        title: "SPAR-Lite: A Disaggregated, Policy-Driven Runtime for Cooperative Thread Scheduling",
        description: "A hybrid runtime prototype that offloads scheduling decisions from C++ applications to an external Rust daemon via Unix Domain Sockets. It demonstrates user-space control over thread-to-core affinity to optimize performance for phase-based workloads (Compute vs. I/O).",
        authors: &[Author { name: "Abhinay Kumar", linkedin: Some(ABHINAY) }],
        repo: Some("https://github.com/Abhinayckrs/SPAR-LITE"),
    },
    ActiveProject {
        id: "a5",
        title: "Benchmarking and Profiling MLPerf workloads on GPUs",
        description: "Benchmarking and profiling MLPerf workloads on GPUs to evaluate performance (throughput, latency, scalability) across training and inference tasks. Analyzing compute, memory, and data-movement bottlenecks to compare GPUs, software stacks, and derive optimization insights for better efficiency and cost-performance.",
        authors: &[Author { name: "Cherukuri Sai Saketh", linkedin: Some(SAKETH) }],
        repo: Some("https://github.com/example/gpu-cpu-visualizer"),
    },
    ActiveProject {
        id: "a6",
        title: "KV Cache Visualizer",
        description: "A register-level memory explorer to profile memory access patterns.",
        authors: &[Author { name: "Gandholi Sarat", linkedin: Some(SARAT) }],
        repo: Some("https://github.com/GandholiSarat/kv-cache-visualizer"),
    },
    ActiveProject {
        id: "a7",
        title: "RTX 4090 Modeling and Microbenchmark-Driven Validation in Accel-Sim",
        description: "This project focuses on generating and refining an RTX 4090 configuration for Accel-Sim using targeted GPU microbenchmarks to characterize cache, memory, and execution behavior. The work emphasizes systematic parameter inference, limitations analysis (e.g., L2 modeling), and validation against real hardware observations.",
        authors: &[Author { name: "Prabin Kumar Sabat", linkedin: Some(PRABIN) }],
        repo: None,
    },
    ActiveProject {
        id: "a8",
        title: "Understanding vLLM Inference Pipeline",
        description: "An in-depth study of how inference is executed end-to-end in vLLM, including mapping high-level concepts to the underlying codebase.",
        authors: &[Author { name: "Gandholi Sarat", linkedin: Some(SARAT) }],
        repo: None,
    },
    ActiveProject {
        id: "a9",
        title: "System Call-Level Modifications for Fine-Grained Hardware Microbenchmarking",
        description: "This project involves modifying kernel interfaces to reduce measurement noise and expose low-level hardware behavior for accurate benchmarking. The changes enable controlled execution, precise timing, and performance counter access essential for microarchitectural analysis.",
        authors: &[Author { name: "Prabin Kumar Sabat", linkedin: Some(PRABIN) }],
        repo: None,
    },
    ActiveProject {
        id: "a10",
        title: "Design of a Developer-Focused Lightweight Operating System for Hardware Microbenchmarking",
        description: "This project develops a minimal, developer-centric operating system environment tailored for repeatable and low-overhead hardware microbenchmarking. The OS integrates essential tooling, deterministic scheduling, and measurement support to facilitate CPU, memory and other studies.",
        authors: &[
            Author { name: "Prabin Kumar Sabat", linkedin: Some(PRABIN) },
            Author { name: "Sai Aswin", linkedin: Some(ASWIN) },
            Author { name: "Narasimha Murthy", linkedin: None },
        ],
        repo: None,
    },
];

pub const MENTORS: &[Profile] = &[
    Profile {
        name: "Dr. R. Raghunatha Sarma",
        designation: "Associate Professor at SSSIHL",
        summary: "Specializes in Computer Architecture and Operating Systems, with over several years of teaching experience.",
        image: "/images/Raghu_sir.jpg",
        linkedin: Some("https://in.linkedin.com/in/dr-raghunatha-sarma-r-81016712"),
    },
    Profile {
        name: "Dr. Srinath M. S",
        designation: "Associate Professor at SSSIHL",
        summary: "Expert in Mathematics and Cryptography",
        image: "/images/Srinath.jpg",
        linkedin: Some("https://www.linkedin.com/in/m-s-srinath-6697b812/"),
    },
    Profile {
        name: "Dr. Sai Shyam Sharma",
        designation: "Associate Professor at SSSIHL",
        summary: "Specialist in Operating Systems, Cyber Security, Computer Vision and Networks",
        image: "/images/Shyam.jpeg",
        linkedin: Some("https://www.linkedin.com/in/sai-shyam-sharma-31004a16/"),
    },
    Profile {
        name: "Mr. M. Naveen",
        designation: "RedHat",
        summary: "Specializes in Computer Architecture and Senior Member Of Technical Staff at AMD",
        image: "/images/Naveen.jpeg",
        linkedin: Some("https://www.linkedin.com/in/naveenmiriyalu/"),
    },
    Profile {
        name: "Mr. Dibyam Pradhan",
        designation: "Principal CPU Architect at ARM",
        summary: "Expert in CPU Design and GPU Architecture",
        image: "/images/Dibyam.jpeg",
        linkedin: Some("https://www.linkedin.com/in/dibyam-pradhan-24b39720/"),
    },
    Profile {
        name: "Mr. Manoj Dusanapudi",
        designation: "Distinguished Engineer at IBM",
        summary: "Multicore System Design Expert",
        image: "/images/Manoj.jpeg",
        linkedin: Some("https://www.linkedin.com/in/manojdusanapudi/"),
    },
    Profile {
        name: "Mr. Saketh Ram Chakilam",
        designation: "Senior Staff Verification Engineer at SiFive",
        summary: "Cache design and Analysis Expert",
        image: "/images/Saketh.jpeg",
        linkedin: Some("https://www.linkedin.com/in/csakethram/"),
    },
    Profile {
        name: "Mr. K. V. K. Vamshi Krishna",
        designation: "System Software Engineer at NVIDIA",
        summary: "Specializes in GPU architecture, Development and Analysis.",
        image: "/images/Vamshi.jpeg",
        linkedin: Some("https://www.linkedin.com/in/vamshi-krishna-a1109516/"),
    },
    Profile {
        name: "Mr. Aravind. S. V",
        designation: "Graduate CPU Architect at ARM",
        summary: "CPU Design and Performance Analysis Expert",
        image: "/images/Aravind.jpeg",
        linkedin: None,
    },
    Profile {
        name: "Mr. Mangala Prasad Sahu",
        designation: "Hardware Developer at IBM",
        summary: "Specializes in Hardware Design and Performance Analysis",
        image: "/images/Mangala.jpeg",
        linkedin: None,
    },
];

pub const PAST_EVENTS: &[PastEvent] = &[
    PastEvent {
        id: 1,
        date: "2025-07-26",
        title: "\u{201c}The PC Builder Challenge\u{201d} - System Fundamentals and PC Building Workshop",
        report_link: "https://drive.google.com/file/d/14rrIuCom7amLkbolOILVtzG1hFJlhPW1/view?usp=drive_link",
        resources_link: "https://drive.google.com/drive/folders/1WQaSN3Oi6kHMR5ogUtprUuxLQ7t8Nl9g?usp=drive_link",
    },
    PastEvent {
        id: 2,
        date: "2025-08-02",
        title: "Visit to SAI HiPC",
        report_link: "https://drive.google.com/file/d/1K4NeZU8Cbdr_WuKwkZFmZntq9E61Bco_/view?usp=drive_link",
        resources_link: "https://drive.google.com/drive/folders/10T8PJSt8KK2FokBF2OmTI2jjjrPXRCVA?usp=drive_link",
    },
];

pub const MEMBERS: &[Profile] = &[
    Profile { name: "Gandholi Sarat", designation: "I M.Tech CS at SSSIHL", summary: "President of the Club", image: "/images/Sarat.png", linkedin: Some(SARAT) },
    Profile { name: "Panuganti Chirag Sai", designation: "I M.Tech CS at SSSIHL", summary: "Vice-President of the Club", image: "/images/Chirag.png", linkedin: Some(CHIRAG) },
    Profile { name: "K Sharat", designation: "I M.Tech CS at SSSIHL", summary: "Secretary of the Club", image: "/images/Sharat.png", linkedin: Some(SHARAT) },
    Profile { name: "Vishwanath Saikiran Shetiya", designation: "Research Scholar at SSSIHL", summary: "Public Relations Coordinator of the Club", image: "/images/Vishwa.png", linkedin: Some(VISHWANATH) },
    Profile { name: "Satya Balaji Animireddy", designation: "I M.Tech CS at SSSIHL", summary: "Website Coordinator of the Club", image: "/images/Balaji.png", linkedin: Some(BALAJI) },
    Profile { name: "Abhinay Kumar", designation: "I M.Tech CS at SSSIHL", summary: "Member of the Club", image: "/images/ABHINAY.jpg", linkedin: Some(ABHINAY) },
    Profile { name: "Cherukuri Sai Saketh", designation: "II M.Sc Mathematics at SSSIHL", summary: "Member of the Club", image: "/images/Sasa.png", linkedin: Some(SAKETH) },
    Profile { name: "Prabin Kumar Sabat", designation: "II M.Sc Mathematics at SSSIHL", summary: "Member of the Club", image: "/images/Prabin.png", linkedin: Some(PRABIN) },
    Profile { name: "Lokesh R", designation: "II M.Sc Mathematics at SSSIHL", summary: "Member of the Club", image: "/images/Lokesh.png", linkedin: Some(LOKESH) },
    Profile { name: "Sai Aswin", designation: "I M.Sc Mathematics at SSSIHL", summary: "Member of the Club", image: "/images/Aswin.png", linkedin: Some(ASWIN) },
    Profile { name: "Prashant Poudyal", designation: "I M.Sc Mathematics at SSSIHL", summary: "Member of the Club", image: "/images/Prashanth.png", linkedin: Some(PRASHANT) },
    Profile { name: "Narasimha Murthy", designation: "I M.Sc Mathematics at SSSIHL", summary: "Member of the Club", image: "/images/Murthy.png", linkedin: None },
    Profile { name: "Sai Krishna", designation: "I M.Sc Mathematics at SSSIHL", summary: "Member of the Club", image: "/images/Krishna.png", linkedin: Some(SAI_KRISHNA) },
    Profile { name: "Subhasish Charan Behera", designation: "I M.Sc Mathematics at SSSIHL", summary: "Member of the Club", image: "/images/Subhashish.png", linkedin: Some(SUBHASISH) },
];

/// `owner/repo` part of a GitHub URL, or the URL itself when it has no such shape.
pub fn repo_name(url: &str) -> &str {
    url.trim_end_matches('/')
        .strip_prefix("https://github.com/")
        .filter(|rest| rest.contains('/'))
        .unwrap_or(url)
}

/// Past events, newest first.
pub fn past_events() -> Vec<PastEvent> {
    let mut events = PAST_EVENTS.to_vec();
    events.sort_by(|a, b| b.date.cmp(a.date));
    events
}
